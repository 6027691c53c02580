/// Physical parameters of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
    /// The spring is at rest once it is this close to the target...
    pub rest_displacement_threshold: f64,
    /// ...and slower than this (units per second).
    pub rest_speed_threshold: f64,
}

impl SpringConfig {
    pub const INDICATOR_TENSION: f64 = 300.0;
    pub const INDICATOR_FRICTION: f64 = 20.0;

    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_displacement_threshold: 0.001,
            rest_speed_threshold: 0.001,
        }
    }

    /// Converts "tension/friction" spring parameters into stiffness and damping.
    pub fn from_tension_friction(tension: f64, friction: f64) -> Self {
        let stiffness = (tension - 30.0) * 3.62 + 194.0;
        let damping = (friction - 8.0) * 3.0 + 25.0;
        Self::new(stiffness, damping, 1.0)
    }

    /// The spring used for the tab indicator (tension 300, friction 20).
    pub fn indicator() -> Self {
        Self::from_tension_friction(Self::INDICATOR_TENSION, Self::INDICATOR_FRICTION)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::indicator()
    }
}

/// Integration step, in seconds.
const STEP_SECS: f64 = 0.001;

fn abs(v: f64) -> f64 {
    if v < 0.0 { -v } else { v }
}

/// A one-dimensional damped spring.
///
/// Changing the target never resets position or velocity: an in-flight animation bends toward
/// the new target instead of restarting.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spring {
    value: f64,
    velocity: f64,
    target: f64,
    config: SpringConfig,
}

impl Spring {
    pub fn new(value: f64, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
            config,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn snap_to(&mut self, value: f64) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn retarget(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        abs(self.value - self.target) <= self.config.rest_displacement_threshold
            && abs(self.velocity) <= self.config.rest_speed_threshold
    }

    /// Advances the spring by `dt_secs`, in fixed 1 ms sub-steps.
    ///
    /// Settles exactly on the target once within the rest thresholds.
    pub fn step(&mut self, dt_secs: f64) {
        if self.is_at_rest() {
            self.snap_to(self.target);
            return;
        }

        let stiffness = if self.config.stiffness > 0.0 {
            self.config.stiffness
        } else {
            0.0
        };
        if stiffness == 0.0 {
            self.snap_to(self.target);
            return;
        }
        let mass = if self.config.mass > 0.0 {
            self.config.mass
        } else {
            1.0
        };

        let mut remaining = if dt_secs > 0.0 { dt_secs } else { 0.0 };
        while remaining > 0.0 {
            let dt = if remaining < STEP_SECS {
                remaining
            } else {
                STEP_SECS
            };
            let displacement = self.value - self.target;
            let acceleration =
                (-stiffness * displacement - self.config.damping * self.velocity) / mass;
            self.velocity += acceleration * dt;
            self.value += self.velocity * dt;
            remaining -= dt;

            if self.is_at_rest() {
                self.snap_to(self.target);
                return;
            }
        }
    }
}

use crate::{Spring, SpringConfig};

/// The scrollable viewport holding the tab track.
///
/// Offsets are unclamped; the container is responsible for clamping to its content bounds.
pub trait ScrollContainer {
    fn scroll_to(&mut self, offset: f64);
}

impl<F: FnMut(f64)> ScrollContainer for F {
    fn scroll_to(&mut self, offset: f64) {
        self(offset)
    }
}

/// Frame length assumed for the first tick of an animation.
const FIRST_FRAME_MS: u64 = 16;
/// Longest time slice simulated by a single tick (e.g. after the app was backgrounded).
const MAX_FRAME_MS: u64 = 64;

/// Animates the indicator toward its target and forwards scroll commands.
///
/// This type does not hold any UI objects. Adapters call `tick(now_ms)` each frame and apply
/// the returned offset as the indicator's horizontal translation.
#[derive(Clone, Debug)]
pub struct AnimationDriver {
    indicator: Spring,
    last_tick_ms: Option<u64>,
}

impl Default for AnimationDriver {
    fn default() -> Self {
        Self::new(SpringConfig::indicator())
    }
}

impl AnimationDriver {
    /// Starts at offset 0, like an indicator that has not been placed yet.
    pub fn new(config: SpringConfig) -> Self {
        Self {
            indicator: Spring::new(0.0, config),
            last_tick_ms: None,
        }
    }

    pub fn indicator(&self) -> &Spring {
        &self.indicator
    }

    pub fn indicator_offset(&self) -> f64 {
        self.indicator.value()
    }

    pub fn indicator_target(&self) -> f64 {
        self.indicator.target()
    }

    pub fn is_animating(&self) -> bool {
        !self.indicator.is_at_rest()
    }

    /// Springs the indicator toward `target`.
    ///
    /// If an animation is in flight it is retargeted from its current position and velocity.
    pub fn animate_indicator(&mut self, target: f64) {
        if self.indicator.target() == target {
            return;
        }
        ttrace!(
            from = self.indicator.value(),
            to = target,
            in_flight = self.is_animating(),
            "AnimationDriver::animate_indicator"
        );
        if !self.is_animating() {
            self.last_tick_ms = None;
        }
        self.indicator.retarget(target);
    }

    /// Places the indicator at `offset` immediately, dropping any animation.
    pub fn snap_indicator(&mut self, offset: f64) {
        self.indicator.snap_to(offset);
        self.last_tick_ms = None;
    }

    /// Issues a single scroll command.
    pub fn command_scroll(&mut self, target: f64, container: &mut (impl ScrollContainer + ?Sized)) {
        ttrace!(target, "AnimationDriver::command_scroll");
        container.scroll_to(target);
    }

    /// Advances the indicator animation.
    ///
    /// Returns the new indicator offset while animating (including the frame it settles on),
    /// or `None` once at rest.
    pub fn tick(&mut self, now_ms: u64) -> Option<f64> {
        if !self.is_animating() {
            self.last_tick_ms = None;
            return None;
        }

        let dt_ms = match self.last_tick_ms {
            Some(last) => now_ms.saturating_sub(last),
            None => FIRST_FRAME_MS,
        }
        .min(MAX_FRAME_MS);
        self.last_tick_ms = Some(now_ms);

        self.indicator.step(dt_ms as f64 / 1000.0);
        if !self.is_animating() {
            tdebug!(offset = self.indicator.value(), "AnimationDriver: indicator settled");
        }
        Some(self.indicator.value())
    }
}

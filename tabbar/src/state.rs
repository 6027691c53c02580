use crate::{Direction, SizeMode, TabMode};

/// Whether the bar has received its first layout measurement.
///
/// There is no way back to `Unmeasured`: a container that later reports width 0 is still a
/// (degenerate) measurement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureState {
    #[default]
    Unmeasured,
    Measured,
}

/// Every input the derived geometry depends on.
///
/// The pipeline compares snapshots of this struct to decide whether anything observable
/// changed. With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabBarInputs {
    /// `None` until the first layout event.
    pub container_width: Option<f64>,
    pub item_count: usize,
    pub selected_index: usize,
    pub mode: TabMode,
    pub direction: Direction,
    pub indicator_width_type: Option<SizeMode>,
    pub indicator_height_type: Option<SizeMode>,
}

impl TabBarInputs {
    pub fn measure_state(&self) -> MeasureState {
        if self.container_width.is_some() {
            MeasureState::Measured
        } else {
            MeasureState::Unmeasured
        }
    }

    /// Selection clamped into `[0, item_count)`. Returns 0 for an empty bar.
    pub fn clamped_selected_index(&self) -> usize {
        self.selected_index.min(self.item_count.saturating_sub(1))
    }
}

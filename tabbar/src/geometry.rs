//! Pure tab bar geometry: tab widths, indicator offsets and scroll targets.
//!
//! Nothing in here holds state or clamps its inputs. An out-of-range `selected_index`
//! produces an offset outside the visible track; callers that want clamping do it first.

use crate::sizes::{
    SCROLL_LEAD_IN, SCROLLABLE_INDICATOR_RATIO, SCROLLABLE_TAB_RATIO, height_value, width_factor,
};
use crate::{Direction, SizeMode, TabMetrics, TabMode};

/// Distance the indicator travels per tab.
///
/// Fixed tabs move by the computed tab width; scrollable tabs by a fixed share of the container.
pub fn scroll_unit(mode: TabMode, container_width: f64, tab_width: f64) -> f64 {
    match mode {
        TabMode::Fixed => tab_width,
        TabMode::Scrollable => container_width * SCROLLABLE_TAB_RATIO,
    }
}

/// Computes tab and indicator sizes for a measured container.
///
/// Returns `None` for fixed tabs with `item_count == 0`: there is nothing to divide the
/// container between, and nothing gets rendered.
pub fn compute_metrics(
    container_width: f64,
    item_count: usize,
    mode: TabMode,
    width_mode: Option<SizeMode>,
    height_mode: Option<SizeMode>,
) -> Option<TabMetrics> {
    let tab_width = match mode {
        TabMode::Fixed => {
            if item_count == 0 {
                return None;
            }
            container_width / item_count as f64
        }
        TabMode::Scrollable => container_width * SCROLLABLE_TAB_RATIO,
    };

    let indicator_width = tab_width / width_factor(width_mode);
    let indicator_height = height_value(height_mode);

    let (render_indicator_width, indicator_margin) = match mode {
        TabMode::Fixed => (indicator_width, (tab_width - indicator_width) / 4.0),
        TabMode::Scrollable => (container_width * SCROLLABLE_INDICATOR_RATIO, 0.0),
    };

    Some(TabMetrics {
        tab_width,
        indicator_width,
        indicator_height,
        render_indicator_width,
        indicator_margin,
    })
}

/// Target translation of the indicator for `selected_index`.
///
/// RTL mirrors the sign; the magnitude is the same in both directions.
pub fn indicator_offset(
    selected_index: usize,
    mode: TabMode,
    container_width: f64,
    tab_width: f64,
    direction: Direction,
) -> f64 {
    let raw = selected_index as f64 * scroll_unit(mode, container_width, tab_width);
    match direction {
        Direction::Ltr => raw,
        Direction::Rtl => -raw,
    }
}

/// Target scroll position of the tab track for `selected_index`.
///
/// Fixed tabs never scroll. Scrollable tabs keep a quarter-unit lead-in plus the previous tab
/// in view; RTL counts from the far end of the track. The result may be negative or past the
/// end of the content: the scroll container clamps it.
pub fn scroll_offset(
    selected_index: usize,
    item_count: usize,
    mode: TabMode,
    container_width: f64,
    direction: Direction,
) -> f64 {
    if mode == TabMode::Fixed {
        return 0.0;
    }

    let unit = container_width * SCROLLABLE_TAB_RATIO;
    let steps = match direction {
        Direction::Ltr => selected_index as f64 - 1.0,
        Direction::Rtl => item_count as f64 - selected_index as f64 - 2.0,
    };
    unit * SCROLL_LEAD_IN + unit * steps
}

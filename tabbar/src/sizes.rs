//! Static size tables for the indicator.

use crate::SizeMode;

/// Share of the container width given to each tab in scrollable mode.
pub const SCROLLABLE_TAB_RATIO: f64 = 0.4;

/// Share of the container width the indicator is drawn with in scrollable mode.
pub const SCROLLABLE_INDICATOR_RATIO: f64 = 0.2;

/// Lead-in (in scroll units) kept before the active tab when scrolling it into view.
pub const SCROLL_LEAD_IN: f64 = 0.25;

/// Default bar (and tab) height.
pub const DEFAULT_BAR_HEIGHT: f64 = 48.0;

pub const DEFAULT_WIDTH_MODE: SizeMode = SizeMode::Big;
pub const DEFAULT_HEIGHT_MODE: SizeMode = SizeMode::Normal;

/// Divisor applied to the tab width to get the indicator width.
///
/// `None` falls back to [`DEFAULT_WIDTH_MODE`] (factor 1).
pub fn width_factor(mode: Option<SizeMode>) -> f64 {
    match mode.unwrap_or(DEFAULT_WIDTH_MODE) {
        SizeMode::Big => 1.0,
        SizeMode::Normal => 1.5,
        SizeMode::Small => 2.0,
    }
}

/// Absolute indicator height, independent of the tab width.
///
/// `None` falls back to [`DEFAULT_HEIGHT_MODE`] (height 2).
pub fn height_value(mode: Option<SizeMode>) -> f64 {
    match mode.unwrap_or(DEFAULT_HEIGHT_MODE) {
        SizeMode::Big => 4.0,
        SizeMode::Normal => 2.0,
        SizeMode::Small => 1.0,
    }
}

//! A headless tab bar engine.
//!
//! For spring-driven indicator animation and scroll commands, see the `tabbar-adapter` crate.
//!
//! This crate focuses on the geometry behind a row of selectable tabs with a moving indicator:
//! per-tab widths, indicator size and offset, and the scroll position that keeps the active
//! tab in view. Fixed and scrollable tabs are supported, as are right-to-left layouts.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the measured container width (on every layout pass)
//! - the tab items and the selected index
//! - the layout direction
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod geometry;
mod items;
mod key;
mod options;
pub mod sizes;
mod state;
mod tab_bar;
mod types;


pub use geometry::{compute_metrics, indicator_offset, scroll_offset, scroll_unit};
pub use items::{DuplicateKeyError, TabItem, TabItems};
pub use options::{
    OnChangeCallback, OnPressCallback, ScrollConfig, TabBarOptions, TabBarStyle, TextStyle,
};
pub use state::{MeasureState, TabBarInputs};
pub use tab_bar::TabBar;
pub use types::{
    Direction, KeyboardShouldPersistTaps, SizeMode, TabLayout, TabMetrics, TabMode, TabSlot,
};

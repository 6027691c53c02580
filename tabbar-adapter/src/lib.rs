//! Adapter utilities for the `tabbar` crate.
//!
//! The `tabbar` crate is UI-agnostic and focuses on geometry and change detection. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - A damped spring for the indicator, retargeted (never restarted) on new selections
//! - A scroll container seam for the horizontal tab track
//! - A controller wiring both to a `TabBar`
//!
//! This crate is intentionally framework-agnostic (no egui/iced bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod driver;
mod spring;

#[cfg(test)]
mod tests;

pub use controller::Controller;
pub use driver::{AnimationDriver, ScrollContainer};
pub use spring::{Spring, SpringConfig};

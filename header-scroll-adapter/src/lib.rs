//! Adapter utilities for the `header-scroll` crate.
//!
//! The `header-scroll` crate is UI-agnostic and focuses on the header math and gesture state.
//! This crate is the boundary to a real scroll view:
//!
//! - [`ScrollHost`]: read the current offset, set a new one (optionally animated)
//! - [`ScrollListener`]: the scroll / drag-end notifications a host delivers
//! - [`Controller`]: wires both directions and defers recomputation to the next tick
//! - [`TweenHost`]: a headless host animated by a [`Tween`]
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod tween;
mod tween_host;


pub use controller::{Controller, pull_distance};
pub use host::{ScrollHost, ScrollListener};
pub use tween::{Easing, Tween};
pub use tween_host::TweenHost;

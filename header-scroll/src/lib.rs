//! A headless scaling-header scroll engine.
//!
//! For host wiring (scroll listener, set-position commands, tween-driven hosts), see the
//! `header-scroll-adapter` crate.
//!
//! This crate maps a one-dimensional scroll offset to header layout: height, vertical offset,
//! scale and collapse progress. On top of that it runs the small gesture state machine behind
//! pull-to-refresh, snap-to-position and scroll-to-top.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the scroll offset on every scroll update
//! - drag begin/end notifications
//! - the content frame's top edge (for pull-to-refresh)
//!
//! and to apply the [`ScrollCommand`]s the engine hands back.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod error;
pub mod geometry;
mod gesture;
mod header_scroll;
mod options;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use error::ConfigError;
pub use gesture::{REFRESH_THRESHOLD, snap_target};
pub use header_scroll::HeaderScroll;
pub use options::{
    DEFAULT_MAX_HEIGHT, DEFAULT_MIN_HEIGHT, HeaderScrollOptions, OnChangeCallback,
    OnRefreshCallback,
};
pub use state::HeaderState;
pub use types::{CommandReason, GesturePhase, HeaderGeometry, Published, ScrollCommand};

use thiserror::Error;

/// Rejected header configuration.
///
/// Returned by [`crate::HeaderScrollOptions::validate`] and by the engine constructors. An
/// invalid configuration is a caller bug, so it is reported once at build time and never
/// clamped into a "valid" shape.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("header heights must be finite (min={min_height}, max={max_height})")]
    NonFiniteHeight { min_height: f32, max_height: f32 },

    #[error("header heights must be non-negative (min={min_height}, max={max_height})")]
    NegativeHeight { min_height: f32, max_height: f32 },

    #[error("min_height must not exceed max_height (min={min_height}, max={max_height})")]
    InvertedHeights { min_height: f32, max_height: f32 },
}

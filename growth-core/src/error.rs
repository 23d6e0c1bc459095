//! Error types for engine construction.

use thiserror::Error;

/// Errors raised when a [`crate::config::Config`] is rejected.
///
/// All variants are fatal to the run being started: the engine refuses to
/// simulate with undefined geometry rather than proceeding silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A force coefficient lies outside `[0, 1]`.
    #[error("force coefficient {name} = {value} outside [0, 1]")]
    ForceOutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The Brownian jitter amplitude lies outside `[0, 0.1]`.
    #[error("brownian range {0} outside [0, 0.1]")]
    BrownianOutOfRange(f32),

    /// A distance-like value lies outside `[0, 1]` of design space.
    #[error("distance {name} = {value} outside [0, 1]")]
    DistanceOutOfRange {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f32,
    },

    /// The prune threshold is not strictly below the split threshold, so
    /// every split would immediately be pruned back.
    #[error("prune threshold {least_min_distance} must be below split threshold {max_distance}")]
    ThresholdsInverted {
        /// Configured prune threshold.
        least_min_distance: f32,
        /// Configured split threshold.
        max_distance: f32,
    },

    /// The boundary polygon would be degenerate.
    #[error("boundary polygon needs at least 3 sides, got {0}")]
    TooFewBoundarySides(u32),

    /// The reference canvas width must be positive to define world units.
    #[error("canvas width must be positive, got {0}")]
    NonPositiveCanvasWidth(f32),
}

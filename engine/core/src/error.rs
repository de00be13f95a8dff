//! Configuration Errors
//!
//! Everything in here is detected eagerly during effect preparation, before
//! a single frame is rendered. Bad configuration aborts the run; it is never
//! silently defaulted.

use thiserror::Error;

/// Errors raised while validating an effect configuration
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A gradient was configured with no color stops
    #[error("gradient requires at least one color stop")]
    EmptyGradientStops,

    /// A gradient step count of zero was configured
    #[error("gradient step count must be positive")]
    ZeroGradientSteps,

    /// A scene was configured to hold each gradient step for zero frames
    #[error("gradient hold frames must be positive")]
    ZeroHoldFrames,

    /// Character movement speed must be strictly positive
    #[error("movement speed must be positive, got {0}")]
    NonPositiveSpeed(f32),

    /// A chunked schedule was configured with empty chunks
    #[error("chunk size must be positive")]
    ZeroChunkSize,

    /// A traversal order name did not match any known direction
    #[error("unknown traversal order {0:?}")]
    UnknownTraversal(String),

    /// An easing curve name did not match any known curve
    #[error("unknown easing curve {0:?}")]
    UnknownEasing(String),

    /// The firework shell color list was empty
    #[error("firework color list must not be empty")]
    EmptyFireworkColors,

    /// The firework shell volume must be in (0, 1]
    #[error("firework volume must be in (0, 1], got {0}")]
    InvalidFireworkVolume(f32),

    /// The explode distance must be in (0, 1]
    #[error("explode distance must be in (0, 1], got {0}")]
    InvalidExplodeDistance(f32),
}

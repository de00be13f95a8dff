//! Easing Curves
//!
//! Easing functions for character motion. The engine itself never evaluates
//! these; it hands them to the stage as part of path registration, and the
//! stage's motion system applies them to path progress. [`EasingFunction::apply`]
//! exists for stage implementations (and tests).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Easing functions for smooth animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EasingFunction {
    /// No easing (constant speed)
    #[default]
    Linear,

    /// Quadratic ease in
    InQuad,

    /// Quadratic ease out
    OutQuad,

    /// Quadratic ease in and out
    InOutQuad,

    /// Cubic ease in
    InCubic,

    /// Cubic ease out
    OutCubic,

    /// Cubic ease in and out
    InOutCubic,

    /// Quartic ease in and out
    InOutQuart,

    /// Exponential ease out
    OutExpo,

    /// Circular ease out
    OutCirc,
}

impl EasingFunction {
    /// Apply the easing function to a progress value (0.0 to 1.0)
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Self::OutExpo => {
                if (t - 1.0).abs() < f32::EPSILON {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::OutCirc => (1.0 - (t - 1.0).powi(2)).sqrt(),
        }
    }
}

impl FromStr for EasingFunction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "linear" => Ok(Self::Linear),
            "in_quad" => Ok(Self::InQuad),
            "out_quad" => Ok(Self::OutQuad),
            "in_out_quad" => Ok(Self::InOutQuad),
            "in_cubic" => Ok(Self::InCubic),
            "out_cubic" => Ok(Self::OutCubic),
            "in_out_cubic" => Ok(Self::InOutCubic),
            "in_out_quart" => Ok(Self::InOutQuart),
            "out_expo" => Ok(Self::OutExpo),
            "out_circ" => Ok(Self::OutCirc),
            other => Err(ConfigError::UnknownEasing(other.to_string())),
        }
    }
}

//! Colors and Gradients
//!
//! Surface-agnostic RGB colors and multi-stop gradients. A [`Gradient`]
//! pre-computes its full spectrum once at construction so that fraction
//! lookups during a run are a plain index, never interpolation math.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;

/// Surface-agnostic RGB color
///
/// Maps to any rendering target: terminals use the nearest 256-color or
/// true color, other surfaces their native color types.
///
/// # Examples
///
/// ```
/// use textfx_core::graphics::Rgb;
///
/// let white: Rgb = "#FFFFFF".parse().unwrap();
/// assert_eq!(white, Rgb::new(255, 255, 255));
/// assert_eq!(white.to_string(), "#FFFFFF");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    /// Red component (0-255)
    pub r: u8,
    /// Green component (0-255)
    pub g: u8,
    /// Blue component (0-255)
    pub b: u8,
}

impl Rgb {
    /// Create a color from RGB components
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linearly interpolate toward `other` by `t` in [0, 1]
    #[must_use]
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u8 {
            (f32::from(a) + (f32::from(b) - f32::from(a)) * t).round() as u8
        };
        Rgb::new(
            blend(self.r, other.r),
            blend(self.g, other.g),
            blend(self.b, other.b),
        )
    }
}

/// Error parsing a hex color string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid color {input:?}: expected RRGGBB hex, optionally prefixed with '#'")]
pub struct ParseColorError {
    /// The rejected input
    pub input: String,
}

impl FromStr for Rgb {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ParseColorError {
                input: s.to_string(),
            });
        }
        let component = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| ParseColorError {
                input: s.to_string(),
            })
        };
        Ok(Rgb::new(component(0..2)?, component(2..4)?, component(4..6)?))
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_string()
    }
}

/// A multi-stop color gradient with a fixed number of interpolation steps
/// per segment.
///
/// Conceptually a function from a fraction in [0, 1] to a color. The full
/// spectrum is materialized at construction; [`Gradient::color_at`] is a
/// constant-time lookup. A single-stop gradient degenerates to a constant
/// color for every fraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gradient {
    spectrum: Vec<Rgb>,
}

impl Gradient {
    /// Build a gradient from ordered color stops.
    ///
    /// `steps` gives the interpolation step count per segment; if there are
    /// fewer entries than segments the last entry repeats, mirroring how
    /// step lists are commonly configured.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyGradientStops`] if `stops` is empty,
    /// [`ConfigError::ZeroGradientSteps`] if `steps` is empty or contains 0.
    pub fn new(stops: &[Rgb], steps: &[usize]) -> Result<Self, ConfigError> {
        let first = *stops.first().ok_or(ConfigError::EmptyGradientStops)?;
        if steps.is_empty() || steps.contains(&0) {
            return Err(ConfigError::ZeroGradientSteps);
        }
        let mut spectrum = vec![first];
        for (segment, pair) in stops.windows(2).enumerate() {
            let count = steps[segment.min(steps.len() - 1)];
            for step in 1..=count {
                let t = step as f32 / count as f32;
                spectrum.push(pair[0].lerp(pair[1], t));
            }
        }
        Ok(Self { spectrum })
    }

    /// The materialized spectrum, first stop to last stop
    #[must_use]
    pub fn spectrum(&self) -> &[Rgb] {
        &self.spectrum
    }

    /// The color at a fraction in [0, 1]; out-of-range fractions clamp.
    #[must_use]
    pub fn color_at(&self, fraction: f32) -> Rgb {
        let f = fraction.clamp(0.0, 1.0);
        let index = (f * (self.spectrum.len() - 1) as f32).round() as usize;
        self.spectrum[index]
    }
}

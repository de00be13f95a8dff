//! Vertical Position Sampling
//!
//! Maps a character's origin row to a normalized fraction of the canvas
//! height. The fraction indexes into a gradient, so characters on the same
//! row always share a color and the gradient sweeps bottom to top.

use crate::geometry::Coord;
use crate::stage::CanvasBounds;

/// Samples normalized vertical positions against a fixed canvas extent.
///
/// Pure function of immutable inputs; the only special case is a
/// single-line canvas (top extent 0), where every fraction is 0.0.
#[derive(Debug, Clone, Copy)]
pub struct PositionSampler {
    top: u16,
}

impl PositionSampler {
    /// Create a sampler for the given canvas extent
    #[must_use]
    pub const fn new(bounds: CanvasBounds) -> Self {
        Self { top: bounds.top }
    }

    /// The fraction of the canvas height at which `origin` sits, in [0, 1].
    ///
    /// Rows above the canvas top clamp to 1.0 rather than extrapolate.
    #[must_use]
    pub fn fraction_of(&self, origin: Coord) -> f32 {
        if self.top == 0 {
            return 0.0;
        }
        (f32::from(origin.row) / f32::from(self.top)).min(1.0)
    }
}

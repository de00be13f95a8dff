//! Final Color Planning
//!
//! Assigns every character its resting color by sampling the caller's final
//! gradient at the character's normalized vertical position, and builds the
//! short start → target transition gradients that stages play back as
//! appearance scenes. The assignment is an explicit owned table keyed by
//! [`CharacterId`], computed once during preparation.

use std::collections::HashMap;

use crate::error::ConfigError;
use crate::graphics::{Gradient, Rgb};
use crate::position::PositionSampler;
use crate::stage::{CharacterId, Stage};

/// Per-character final color table.
///
/// Deterministic: planning the same characters against the same gradient
/// always produces identical targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorAssigner {
    targets: HashMap<CharacterId, Rgb>,
}

impl ColorAssigner {
    /// Sample the final gradient at every character's vertical fraction.
    pub fn plan<S: Stage + ?Sized>(stage: &S, final_gradient: &Gradient) -> Self {
        let sampler = PositionSampler::new(stage.bounds());
        let targets = stage
            .characters()
            .into_iter()
            .map(|id| {
                let fraction = sampler.fraction_of(stage.origin(id));
                (id, final_gradient.color_at(fraction))
            })
            .collect();
        Self { targets }
    }

    /// The planned resting color for a character, if it was planned
    #[must_use]
    pub fn target_of(&self, id: CharacterId) -> Option<Rgb> {
        self.targets.get(&id).copied()
    }

    /// Build the start → target transition gradient for one character.
    ///
    /// # Errors
    ///
    /// [`ConfigError::ZeroGradientSteps`] if `steps` is 0.
    pub fn transition_for(
        &self,
        id: CharacterId,
        start: Rgb,
        steps: usize,
    ) -> Result<Gradient, ConfigError> {
        let target = self.target_of(id).unwrap_or(start);
        Gradient::new(&[start, target], &[steps])
    }

    /// Number of planned characters
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether no characters were planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

//! Wipe Effect
//!
//! A directional sweep across the canvas reveals characters group by group:
//! one group per column, row, or diagonal depending on the traversal order.
//! Characters do not move; each plays a color transition from the
//! gradient's first stop to its final color as it appears.

use serde::{Deserialize, Serialize};

use crate::coloring::ColorAssigner;
use crate::error::ConfigError;
use crate::graphics::{Gradient, Rgb};
use crate::lifecycle::LifecycleSet;
use crate::runner::EffectRunner;
use crate::schedule::{SchedulePolicy, TraversalOrder};
use crate::stage::Stage;

/// Configuration for the wipe effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct WipeConfig {
    /// Sweep direction
    pub direction: TraversalOrder,
    /// Gradient stops for the reveal transition, applied bottom to top
    pub gradient_stops: Vec<Rgb>,
    /// Interpolation steps per gradient segment; also the length of each
    /// character's reveal transition
    pub gradient_steps: usize,
    /// Ticks each color step is held on screen
    pub gradient_frames: u32,
    /// Ticks to wait between revealing successive groups
    pub wipe_delay: u32,
}

impl Default for WipeConfig {
    fn default() -> Self {
        Self {
            direction: TraversalOrder::ColumnLeftToRight,
            gradient_stops: vec![
                Rgb::new(0x8A, 0x00, 0x8A),
                Rgb::new(0x00, 0xD1, 0xFF),
                Rgb::new(0xFF, 0xFF, 0xFF),
            ],
            gradient_steps: 12,
            gradient_frames: 5,
            wipe_delay: 0,
        }
    }
}

impl WipeConfig {
    /// Set the sweep direction
    #[must_use]
    pub fn with_direction(mut self, direction: TraversalOrder) -> Self {
        self.direction = direction;
        self
    }

    /// Replace the gradient stops
    #[must_use]
    pub fn with_gradient_stops(mut self, stops: Vec<Rgb>) -> Self {
        self.gradient_stops = stops;
        self
    }

    /// Set the delay between group reveals
    #[must_use]
    pub fn with_wipe_delay(mut self, delay: u32) -> Self {
        self.wipe_delay = delay;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gradient_steps == 0 {
            return Err(ConfigError::ZeroGradientSteps);
        }
        if self.gradient_frames == 0 {
            return Err(ConfigError::ZeroHoldFrames);
        }
        Ok(())
    }
}

/// Run the one-time preparation phase and build the runner.
///
/// Registers every character's reveal scene, then schedules the traversal
/// groups with the configured stagger delay.
///
/// # Errors
///
/// Configuration problems ([`ConfigError`]) are raised here, before any
/// frame is rendered.
pub fn prepare<S: Stage + ?Sized>(
    stage: &mut S,
    config: &WipeConfig,
) -> Result<EffectRunner, ConfigError> {
    config.validate()?;
    let start_color = *config
        .gradient_stops
        .first()
        .ok_or(ConfigError::EmptyGradientStops)?;
    let final_gradient = Gradient::new(&config.gradient_stops, &[config.gradient_steps])?;
    let colors = ColorAssigner::plan(stage, &final_gradient);

    let characters = stage.characters();
    tracing::debug!(
        characters = characters.len(),
        direction = %config.direction,
        "preparing wipe effect"
    );
    for id in characters {
        let scene = stage.new_scene(id);
        let transition = colors.transition_for(id, start_color, config.gradient_steps)?;
        stage.apply_gradient_scene(id, scene, &transition, config.gradient_frames);
        stage.activate_scene(id, scene);
    }

    let policy = SchedulePolicy::Traversal {
        order: config.direction,
        stagger_delay: config.wipe_delay,
    };
    let groups = policy.build_groups(stage)?;
    Ok(EffectRunner::new(LifecycleSet::new(groups, config.wipe_delay)))
}

//! Expand Effect
//!
//! Every character starts at the canvas center and eases outward to its
//! resting cell, transitioning from the gradient's first stop to its final
//! color on the way. All characters release together at tick 0; there is no
//! staggering.

use serde::{Deserialize, Serialize};

use crate::coloring::ColorAssigner;
use crate::easing::EasingFunction;
use crate::error::ConfigError;
use crate::graphics::{Gradient, Rgb};
use crate::lifecycle::LifecycleSet;
use crate::runner::EffectRunner;
use crate::schedule::SchedulePolicy;
use crate::stage::{PathAction, PathEvent, Stage};

/// Interpolation steps in each character's start → target color transition
const TRANSITION_STEPS: usize = 10;

/// Configuration for the expand effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExpandConfig {
    /// Final gradient stops, applied bottom to top
    pub gradient_stops: Vec<Rgb>,
    /// Interpolation steps per final-gradient segment
    pub gradient_steps: usize,
    /// Ticks each color step is held on screen
    pub gradient_frames: u32,
    /// Character movement speed in cells per tick
    pub movement_speed: f32,
    /// Easing applied to the outward motion
    pub easing: EasingFunction,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            gradient_stops: vec![
                Rgb::new(0x8A, 0x00, 0x8A),
                Rgb::new(0x00, 0xD1, 0xFF),
                Rgb::new(0xFF, 0xFF, 0xFF),
            ],
            gradient_steps: 12,
            gradient_frames: 5,
            movement_speed: 0.35,
            easing: EasingFunction::InOutQuart,
        }
    }
}

impl ExpandConfig {
    /// Replace the final gradient stops
    #[must_use]
    pub fn with_gradient_stops(mut self, stops: Vec<Rgb>) -> Self {
        self.gradient_stops = stops;
        self
    }

    /// Set the movement speed
    #[must_use]
    pub fn with_movement_speed(mut self, speed: f32) -> Self {
        self.movement_speed = speed;
        self
    }

    /// Set the motion easing curve
    #[must_use]
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.gradient_steps == 0 {
            return Err(ConfigError::ZeroGradientSteps);
        }
        if self.gradient_frames == 0 {
            return Err(ConfigError::ZeroHoldFrames);
        }
        if self.movement_speed <= 0.0 {
            return Err(ConfigError::NonPositiveSpeed(self.movement_speed));
        }
        Ok(())
    }
}

/// Run the one-time preparation phase and build the runner.
///
/// Parks every character at the canvas center, registers its outward path
/// and color scene, and raises its draw layer for the duration of the
/// flight so moving characters pass over settled ones.
///
/// # Errors
///
/// Configuration problems ([`ConfigError`]) are raised here, before any
/// frame is rendered.
pub fn prepare<S: Stage + ?Sized>(
    stage: &mut S,
    config: &ExpandConfig,
) -> Result<EffectRunner, ConfigError> {
    config.validate()?;
    let start_color = *config
        .gradient_stops
        .first()
        .ok_or(ConfigError::EmptyGradientStops)?;
    let final_gradient = Gradient::new(&config.gradient_stops, &[config.gradient_steps])?;
    let colors = ColorAssigner::plan(stage, &final_gradient);
    let center = stage.bounds().center();

    let characters = stage.characters();
    tracing::debug!(characters = characters.len(), "preparing expand effect");
    for id in characters {
        let origin = stage.origin(id);
        stage.set_start_coordinate(id, center);

        let path = stage.new_path(id, config.movement_speed, config.easing);
        stage.add_waypoint(id, path, origin);
        stage.register_path_event(id, PathEvent::Activated, path, PathAction::SetLayer(1));
        stage.register_path_event(id, PathEvent::Complete, path, PathAction::SetLayer(0));
        stage.activate_path(id, path);

        let scene = stage.new_scene(id);
        let transition = colors.transition_for(id, start_color, TRANSITION_STEPS)?;
        stage.apply_gradient_scene(id, scene, &transition, config.gradient_frames);
        stage.activate_scene(id, scene);
    }

    let groups = SchedulePolicy::SingleGroup.build_groups(stage)?;
    Ok(EffectRunner::new(LifecycleSet::new(groups, 0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Coord;
    use crate::stage::test_support::ScriptedStage;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_everyone_releases_in_one_group() {
        let mut stage = ScriptedStage::from_origins(vec![
            Coord::new(0, 0),
            Coord::new(5, 3),
            Coord::new(9, 1),
        ]);
        let runner = prepare(&mut stage, &ExpandConfig::default()).unwrap();
        assert_eq!(runner.lifecycle().pending_groups(), 1);
    }

    #[test]
    fn test_bad_configs_are_rejected_eagerly() {
        let mut stage = ScriptedStage::from_origins(vec![Coord::new(0, 0)]);

        let no_stops = ExpandConfig::default().with_gradient_stops(Vec::new());
        assert_eq!(
            prepare(&mut stage, &no_stops).unwrap_err(),
            ConfigError::EmptyGradientStops
        );

        let stopped = ExpandConfig::default().with_movement_speed(0.0);
        assert_eq!(
            prepare(&mut stage, &stopped).unwrap_err(),
            ConfigError::NonPositiveSpeed(0.0)
        );

        let mut zero_steps = ExpandConfig::default();
        zero_steps.gradient_steps = 0;
        assert_eq!(
            prepare(&mut stage, &zero_steps).unwrap_err(),
            ConfigError::ZeroGradientSteps
        );

        let mut zero_frames = ExpandConfig::default();
        zero_frames.gradient_frames = 0;
        assert_eq!(
            prepare(&mut stage, &zero_frames).unwrap_err(),
            ConfigError::ZeroHoldFrames
        );
    }

    #[test]
    fn test_config_parses_from_json() {
        let config: ExpandConfig = serde_json::from_str(
            r##"{ "gradient_stops": ["#FFFFFF"], "movement_speed": 0.5, "easing": "out_expo" }"##,
        )
        .unwrap();
        assert_eq!(config.gradient_stops, vec![Rgb::new(255, 255, 255)]);
        assert_eq!(config.easing, EasingFunction::OutExpo);
        // Unspecified fields keep their defaults.
        assert_eq!(config.gradient_steps, 12);
    }
}

//! Fireworks Effect
//!
//! Characters are grouped into shells in reading order. Each shell launches
//! from the bottom of the canvas to a random apex, explodes into a burst
//! around it, then every character falls into its resting cell while fading
//! from the shell color to its final gradient color. The whole flight is
//! wired through declarative path events: the engine registers the chain at
//! preparation time and never looks at it again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::coloring::ColorAssigner;
use crate::easing::EasingFunction;
use crate::error::ConfigError;
use crate::geometry::{find_coord_at_distance, find_coords_in_circle, Coord};
use crate::graphics::{Gradient, Rgb};
use crate::lifecycle::LifecycleSet;
use crate::runner::EffectRunner;
use crate::schedule::SchedulePolicy;
use crate::stage::{PathAction, PathEvent, Stage};

const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Steps and hold frames of the falling color transition
const FALL_STEPS: usize = 15;
const FALL_HOLD_FRAMES: u32 = 15;

/// Configuration for the fireworks effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct FireworksConfig {
    /// Colors shells are randomly drawn from
    pub firework_colors: Vec<Rgb>,
    /// Symbol shown while a shell is in flight
    pub firework_symbol: char,
    /// Fraction of all characters per shell, in (0, 1]
    pub firework_volume: f32,
    /// Final gradient stops, applied bottom to top
    pub final_gradient_stops: Vec<Rgb>,
    /// Interpolation steps per final-gradient segment
    pub final_gradient_steps: usize,
    /// Ticks to wait between shell launches
    pub launch_delay: u32,
    /// Burst radius as a fraction of the canvas width, in (0, 1]
    pub explode_distance: f32,
    /// Allow shells to explode anywhere instead of above their own text
    pub explode_anywhere: bool,
    /// Seed for shell placement and colors; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl Default for FireworksConfig {
    fn default() -> Self {
        Self {
            firework_colors: vec![
                Rgb::new(0x88, 0xF7, 0xE2),
                Rgb::new(0x44, 0xD4, 0x92),
                Rgb::new(0xF5, 0xEB, 0x67),
                Rgb::new(0xFF, 0xA1, 0x5C),
                Rgb::new(0xFA, 0x23, 0x3E),
            ],
            firework_symbol: 'o',
            firework_volume: 0.02,
            final_gradient_stops: vec![
                Rgb::new(0x8A, 0x00, 0x8A),
                Rgb::new(0x00, 0xD1, 0xFF),
                Rgb::new(0xFF, 0xFF, 0xFF),
            ],
            final_gradient_steps: 12,
            launch_delay: 60,
            explode_distance: 0.1,
            explode_anywhere: false,
            seed: None,
        }
    }
}

impl FireworksConfig {
    /// Seed the shell randomness for reproducible runs
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the delay between shell launches
    #[must_use]
    pub fn with_launch_delay(mut self, delay: u32) -> Self {
        self.launch_delay = delay;
        self
    }

    /// Replace the shell color pool
    #[must_use]
    pub fn with_firework_colors(mut self, colors: Vec<Rgb>) -> Self {
        self.firework_colors = colors;
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.firework_colors.is_empty() {
            return Err(ConfigError::EmptyFireworkColors);
        }
        if !(self.firework_volume > 0.0 && self.firework_volume <= 1.0) {
            return Err(ConfigError::InvalidFireworkVolume(self.firework_volume));
        }
        if !(self.explode_distance > 0.0 && self.explode_distance <= 1.0) {
            return Err(ConfigError::InvalidExplodeDistance(self.explode_distance));
        }
        if self.final_gradient_steps == 0 {
            return Err(ConfigError::ZeroGradientSteps);
        }
        Ok(())
    }
}

/// Run the one-time preparation phase and build the runner.
///
/// Builds the shell groups, registers every character's apex → explode →
/// fall path chain and its launch/bloom/fall scenes, and schedules the
/// shells with the configured launch delay.
///
/// # Errors
///
/// Configuration problems ([`ConfigError`]) are raised here, before any
/// frame is rendered.
pub fn prepare<S: Stage + ?Sized>(
    stage: &mut S,
    config: &FireworksConfig,
) -> Result<EffectRunner, ConfigError> {
    config.validate()?;
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let final_gradient = Gradient::new(&config.final_gradient_stops, &[config.final_gradient_steps])?;
    let colors = ColorAssigner::plan(stage, &final_gradient);
    let bounds = stage.bounds();

    let characters = stage.characters();
    let shell_size = ((config.firework_volume * characters.len() as f32).round() as usize).max(1);
    let burst_radius = ((f32::from(bounds.right) * config.explode_distance).round() as u16).max(1);

    let policy = SchedulePolicy::Chunked {
        chunk_size: shell_size,
        stagger_delay: config.launch_delay,
    };
    let shells = policy.build_groups(stage)?;
    tracing::debug!(
        characters = characters.len(),
        shells = shells.len(),
        shell_size,
        "preparing fireworks effect"
    );

    for shell in &shells {
        let shell_color = config.firework_colors[rng.gen_range(0..config.firework_colors.len())];

        // Shells explode above their own text unless told otherwise.
        let min_row = if config.explode_anywhere {
            0
        } else {
            shell
                .members
                .first()
                .map(|&id| stage.origin(id).row)
                .unwrap_or(0)
        };
        let apex = Coord::new(
            rng.gen_range(0..=bounds.right),
            rng.gen_range(min_row..=bounds.top.max(min_row)),
        );
        let burst = find_coords_in_circle(apex, burst_radius);

        for &id in &shell.members {
            let origin = stage.origin(id);
            let symbol = stage.symbol(id);
            stage.set_start_coordinate(id, Coord::new(apex.column, 0));

            let apex_path = stage.new_path(id, 0.2, EasingFunction::OutExpo);
            stage.add_waypoint(id, apex_path, apex);

            let burst_target = burst[rng.gen_range(0..burst.len())];
            let bloom_control = find_coord_at_distance(apex, burst_target, burst_radius / 2);
            let explode_path = stage.new_path(id, 0.15, EasingFunction::OutCirc);
            stage.add_waypoint(id, explode_path, burst_target);
            stage.add_curved_waypoint(
                id,
                explode_path,
                Coord::new(bloom_control.column, bloom_control.row.saturating_sub(7)),
                bloom_control,
            );

            let fall_path = stage.new_path(id, 0.3, EasingFunction::InOutQuart);
            stage.add_curved_waypoint(id, fall_path, origin, Coord::new(bloom_control.column, 0));

            stage.register_path_event(id, PathEvent::Activated, apex_path, PathAction::SetLayer(2));
            stage.register_path_event(id, PathEvent::Complete, explode_path, PathAction::SetLayer(0));
            stage.register_path_event(
                id,
                PathEvent::Complete,
                apex_path,
                PathAction::ActivatePath(explode_path),
            );
            stage.register_path_event(
                id,
                PathEvent::Complete,
                explode_path,
                PathAction::ActivatePath(fall_path),
            );

            let launch_scene = stage.new_scene(id);
            stage.add_scene_frame(id, launch_scene, config.firework_symbol, 2, shell_color);
            stage.add_scene_frame(id, launch_scene, config.firework_symbol, 1, WHITE);
            stage.set_scene_looping(id, launch_scene, true);

            let bloom_scene = stage.new_scene(id);
            stage.add_scene_frame(id, bloom_scene, symbol, 1, shell_color);

            let fall_scene = stage.new_scene(id);
            let fall_gradient = Gradient::new(
                &[shell_color, colors.target_of(id).unwrap_or(shell_color)],
                &[FALL_STEPS],
            )?;
            stage.apply_gradient_scene(id, fall_scene, &fall_gradient, FALL_HOLD_FRAMES);

            stage.register_path_event(
                id,
                PathEvent::Complete,
                apex_path,
                PathAction::ActivateScene(bloom_scene),
            );
            stage.register_path_event(
                id,
                PathEvent::Activated,
                fall_path,
                PathAction::ActivateScene(fall_scene),
            );

            stage.activate_scene(id, launch_scene);
            stage.activate_path(id, apex_path);
        }
    }

    Ok(EffectRunner::new(LifecycleSet::new(
        shells,
        config.launch_delay,
    )))
}

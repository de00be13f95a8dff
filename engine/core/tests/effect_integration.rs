//! End-to-end runs of the built-in effects against a recording mock stage.
//!
//! The mock models liveness the simplest way that exercises the loop: every
//! character survives a fixed number of advance calls and then reports dead.
//! Registration calls are recorded so tests can assert on planned colors
//! and release timing without any real rendering.

use std::collections::HashMap;

use pretty_assertions::assert_eq;
use textfx_core::effects::{expand, fireworks, wipe};
use textfx_core::effects::{ExpandConfig, FireworksConfig, WipeConfig};
use textfx_core::{
    CanvasBounds, CharacterId, Coord, EasingFunction, Gradient, PathAction, PathEvent, PathHandle,
    Rgb, RunState, SceneHandle, Stage, TraversalOrder,
};

struct MockStage {
    origins: Vec<Coord>,
    ttl: Vec<u32>,
    next_handle: usize,
    /// First and last spectrum color of every gradient scene, per character
    gradients: HashMap<CharacterId, Vec<(Rgb, Rgb)>>,
    /// Tick index on which each character first became visible
    visible_at: HashMap<CharacterId, u32>,
    frames_rendered: u32,
}

impl MockStage {
    fn new(origins: Vec<Coord>, ttl: u32) -> Self {
        let n = origins.len();
        Self {
            origins,
            ttl: vec![ttl; n],
            next_handle: 0,
            gradients: HashMap::new(),
            visible_at: HashMap::new(),
            frames_rendered: 0,
        }
    }

    /// A column of characters at rows 0..n on column 0.
    fn column(n: u16, ttl: u32) -> Self {
        Self::new((0..n).map(|row| Coord::new(0, row)).collect(), ttl)
    }

    fn final_color_of(&self, id: CharacterId) -> Option<Rgb> {
        self.gradients.get(&id)?.last().map(|&(_, last)| last)
    }

    fn handle(&mut self) -> usize {
        self.next_handle += 1;
        self.next_handle
    }
}

impl Stage for MockStage {
    fn characters(&self) -> Vec<CharacterId> {
        (0..self.origins.len()).map(CharacterId).collect()
    }

    fn origin(&self, id: CharacterId) -> Coord {
        self.origins[id.0]
    }

    fn symbol(&self, _id: CharacterId) -> char {
        '*'
    }

    fn is_alive(&self, id: CharacterId) -> bool {
        self.ttl[id.0] > 0
    }

    fn bounds(&self) -> CanvasBounds {
        CanvasBounds::new(
            self.origins.iter().map(|c| c.row).max().unwrap_or(0),
            self.origins.iter().map(|c| c.column).max().unwrap_or(0),
        )
    }

    fn set_start_coordinate(&mut self, _id: CharacterId, _coord: Coord) {}

    fn new_path(&mut self, _id: CharacterId, _speed: f32, _easing: EasingFunction) -> PathHandle {
        PathHandle(self.handle())
    }

    fn add_waypoint(&mut self, _id: CharacterId, _path: PathHandle, _coord: Coord) {}

    fn add_curved_waypoint(
        &mut self,
        _id: CharacterId,
        _path: PathHandle,
        _coord: Coord,
        _control: Coord,
    ) {
    }

    fn activate_path(&mut self, _id: CharacterId, _path: PathHandle) {}

    fn new_scene(&mut self, _id: CharacterId) -> SceneHandle {
        SceneHandle(self.handle())
    }

    fn apply_gradient_scene(
        &mut self,
        id: CharacterId,
        _scene: SceneHandle,
        gradient: &Gradient,
        _hold_frames: u32,
    ) {
        let spectrum = gradient.spectrum();
        self.gradients
            .entry(id)
            .or_default()
            .push((spectrum[0], *spectrum.last().unwrap()));
    }

    fn add_scene_frame(
        &mut self,
        _id: CharacterId,
        _scene: SceneHandle,
        _symbol: char,
        _hold_frames: u32,
        _color: Rgb,
    ) {
    }

    fn set_scene_looping(&mut self, _id: CharacterId, _scene: SceneHandle, _looping: bool) {}

    fn activate_scene(&mut self, _id: CharacterId, _scene: SceneHandle) {}

    fn register_path_event(
        &mut self,
        _id: CharacterId,
        _event: PathEvent,
        _path: PathHandle,
        _action: PathAction,
    ) {
    }

    fn set_visible(&mut self, id: CharacterId, visible: bool) {
        if visible {
            self.visible_at.entry(id).or_insert(self.frames_rendered);
        }
    }

    fn render_frame(&mut self) {
        self.frames_rendered += 1;
    }

    fn tick_character(&mut self, id: CharacterId) {
        self.ttl[id.0] = self.ttl[id.0].saturating_sub(1);
    }
}

/// Three characters at rows 0, 1, 2 with a single-stop white gradient:
/// every character targets white and everything releases at tick 0.
#[test]
fn expand_single_stop_targets_white_and_releases_together() {
    let mut stage = MockStage::column(3, 2);
    let config = ExpandConfig::default().with_gradient_stops(vec![Rgb::new(255, 255, 255)]);
    let mut runner = expand::prepare(&mut stage, &config).unwrap();
    runner.run(&mut stage);

    assert_eq!(runner.state(), RunState::Done);
    for id in stage.characters() {
        assert_eq!(stage.final_color_of(id), Some(Rgb::new(255, 255, 255)));
        assert_eq!(stage.visible_at.get(&id), Some(&0));
    }
    assert_eq!(runner.lifecycle().settled().len(), 3);
}

/// Four characters in two columns, column wipe with delay 1: the second
/// column releases exactly at tick 2, and the run only completes after
/// every character reports dead.
#[test]
fn wipe_staggers_columns_at_delay_plus_one() {
    let origins = vec![
        Coord::new(0, 1),
        Coord::new(4, 1),
        Coord::new(0, 0),
        Coord::new(4, 0),
    ];
    let mut stage = MockStage::new(origins, 3);
    let config = WipeConfig::default().with_wipe_delay(1);
    let mut runner = wipe::prepare(&mut stage, &config).unwrap();
    runner.run(&mut stage);

    assert_eq!(runner.state(), RunState::Done);
    // Left column (ids 0, 2) at tick 0; right column (ids 1, 3) at tick 2.
    assert_eq!(stage.visible_at[&CharacterId(0)], 0);
    assert_eq!(stage.visible_at[&CharacterId(2)], 0);
    assert_eq!(stage.visible_at[&CharacterId(1)], 2);
    assert_eq!(stage.visible_at[&CharacterId(3)], 2);
    // Second column survives 3 advances starting at tick 2, so the run
    // spans ticks 0..=4.
    assert_eq!(stage.frames_rendered, 5);
    assert_eq!(runner.lifecycle().settled().len(), 4);
}

/// Group k of a staggered traversal releases exactly at tick k × (D + 1).
#[test]
fn wipe_release_schedule_is_exact() {
    let origins = vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0)];
    let mut stage = MockStage::new(origins, 1);
    let config = WipeConfig::default()
        .with_direction(TraversalOrder::ColumnLeftToRight)
        .with_wipe_delay(2);
    let mut runner = wipe::prepare(&mut stage, &config).unwrap();
    runner.run(&mut stage);

    for (k, id) in [CharacterId(0), CharacterId(1), CharacterId(2)]
        .into_iter()
        .enumerate()
    {
        assert_eq!(stage.visible_at[&id], 3 * k as u32);
    }
}

/// An empty character collection completes immediately after preparation
/// with zero frames rendered.
#[test]
fn empty_input_renders_nothing() {
    let mut stage = MockStage::new(Vec::new(), 1);
    let mut runner = expand::prepare(&mut stage, &ExpandConfig::default()).unwrap();
    runner.run(&mut stage);
    assert_eq!(runner.state(), RunState::Done);
    assert_eq!(stage.frames_rendered, 0);

    let mut runner = wipe::prepare(&mut stage, &WipeConfig::default()).unwrap();
    runner.run(&mut stage);
    assert_eq!(stage.frames_rendered, 0);
}

/// After any run, every character lands in the settled partition exactly
/// once: no duplicates, no omissions.
#[test]
fn every_character_settles_exactly_once() {
    let origins: Vec<Coord> = (0..4)
        .flat_map(|row| (0..6).map(move |col| Coord::new(col, row)))
        .collect();
    let n = origins.len();
    let mut stage = MockStage::new(origins, 4);
    let config = WipeConfig::default()
        .with_direction(TraversalOrder::DiagonalTopLeftToBottomRight)
        .with_wipe_delay(0);
    let mut runner = wipe::prepare(&mut stage, &config).unwrap();
    runner.run(&mut stage);

    let mut settled: Vec<usize> = runner.lifecycle().settled().iter().map(|id| id.0).collect();
    settled.sort_unstable();
    assert_eq!(settled, (0..n).collect::<Vec<_>>());
}

/// Identical input, gradient, and policy produce identical per-character
/// target colors and identical release partitions.
#[test]
fn preparation_is_deterministic() {
    let origins: Vec<Coord> = (0..3)
        .flat_map(|row| (0..5).map(move |col| Coord::new(col, row)))
        .collect();
    let config = WipeConfig::default().with_direction(TraversalOrder::RowBottomToTop);

    let mut a = MockStage::new(origins.clone(), 1);
    let mut b = MockStage::new(origins, 1);
    let mut runner_a = wipe::prepare(&mut a, &config).unwrap();
    let mut runner_b = wipe::prepare(&mut b, &config).unwrap();
    runner_a.run(&mut a);
    runner_b.run(&mut b);

    assert_eq!(a.gradients, b.gradients);
    assert_eq!(a.visible_at, b.visible_at);
}

/// Fireworks settles every character exactly once despite the chained
/// paths, and seeded runs release shells on the same schedule.
#[test]
fn fireworks_settles_everyone_and_respects_launch_delay() {
    let origins: Vec<Coord> = (0..2)
        .flat_map(|row| (0..5).map(move |col| Coord::new(col, row)))
        .collect();
    let n = origins.len();
    let mut stage = MockStage::new(origins, 2);
    let config = FireworksConfig::default()
        .with_seed(1234)
        .with_launch_delay(1);
    // Default volume on 10 characters rounds to shells of one.
    let mut runner = fireworks::prepare(&mut stage, &config).unwrap();
    assert_eq!(runner.lifecycle().pending_groups(), n);
    runner.run(&mut stage);

    let mut settled: Vec<usize> = runner.lifecycle().settled().iter().map(|id| id.0).collect();
    settled.sort_unstable();
    assert_eq!(settled, (0..n).collect::<Vec<_>>());

    // Shell k launches at tick k × (delay + 1); visibility order follows
    // reading order because shells are chunked that way.
    let mut release_ticks: Vec<u32> = stage.visible_at.values().copied().collect();
    release_ticks.sort_unstable();
    assert_eq!(
        release_ticks,
        (0..n as u32).map(|k| 2 * k).collect::<Vec<_>>()
    );
}

//! Terminal Stage
//!
//! The terminal-side implementation of the engine's [`Stage`] boundary.
//! Owns the parsed cells, their registered paths and scenes, and the
//! declarative path-event wiring. Each engine tick advances motion and
//! scene playback for exactly the characters the engine asks about; the
//! frame snapshot taken in [`TerminalStage::render_frame`] is what the
//! ratatui painter draws.

use std::collections::VecDeque;

use textfx_core::{
    CanvasBounds, CharacterId, Coord, EasingFunction, Gradient, PathAction, PathEvent, PathHandle,
    Rgb, SceneHandle, Stage,
};

use crate::cell::{parse_text, Cell};
use crate::motion::{MotionState, PathSpec, Waypoint};
use crate::scenes::Scene;

/// One visible glyph of a finished frame, ready to paint
#[derive(Debug, Clone, Copy)]
pub struct RenderedCell {
    /// Canvas column
    pub column: u16,
    /// Canvas row (0 is the bottom line)
    pub row: u16,
    /// Glyph to paint
    pub symbol: char,
    /// Foreground color
    pub color: Rgb,
    /// Draw layer; the snapshot is sorted so higher layers come last
    pub layer: u8,
}

struct PathEntry {
    spec: PathSpec,
}

struct SceneEntry {
    scene: Scene,
}

struct Registration {
    event: PathEvent,
    path: usize,
    action: PathAction,
}

struct ActiveMotion {
    path: usize,
    state: MotionState,
}

/// A terminal rendering surface driven by the effect engine
pub struct TerminalStage {
    cells: Vec<Cell>,
    bounds: CanvasBounds,
    paths: Vec<PathEntry>,
    scenes: Vec<SceneEntry>,
    registrations: Vec<Registration>,
    active_motion: Vec<Option<ActiveMotion>>,
    active_scene: Vec<Option<usize>>,
    last_frame: Vec<RenderedCell>,
    frames_rendered: u64,
}

impl TerminalStage {
    /// Parse input text into a stage; the canvas is sized to the text
    pub fn from_text(text: &str) -> Self {
        let cells = parse_text(text);
        let top = cells.iter().map(|c| c.origin.row).max().unwrap_or(0);
        let right = cells.iter().map(|c| c.origin.column).max().unwrap_or(0);
        let n = cells.len();
        Self {
            cells,
            bounds: CanvasBounds::new(top, right),
            paths: Vec::new(),
            scenes: Vec::new(),
            registrations: Vec::new(),
            active_motion: (0..n).map(|_| None).collect(),
            active_scene: vec![None; n],
            last_frame: Vec::new(),
            frames_rendered: 0,
        }
    }

    /// Grow the canvas to at least the given extent, so effects that use
    /// the full canvas (apex placement, centering) get the whole terminal
    /// rather than the text's bounding box.
    #[must_use]
    pub fn with_bounds(mut self, bounds: CanvasBounds) -> Self {
        self.bounds = CanvasBounds::new(
            self.bounds.top.max(bounds.top),
            self.bounds.right.max(bounds.right),
        );
        self
    }

    /// The snapshot taken by the last `render_frame` call
    pub fn last_frame(&self) -> &[RenderedCell] {
        &self.last_frame
    }

    /// Total frames snapshotted so far
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered
    }

    /// Number of staged characters
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn begin_path(&mut self, id: CharacterId, path: usize) {
        let cell = &self.cells[id.0];
        let state = MotionState::begin(&self.paths[path].spec, cell.position);
        self.active_motion[id.0] = Some(ActiveMotion { path, state });
    }

    fn apply_scene_frame(&mut self, id: CharacterId, scene: usize) {
        if let Some(frame) = self.scenes[scene].scene.current() {
            let cell = &mut self.cells[id.0];
            cell.shown_symbol = frame.symbol;
            cell.color = frame.color;
        }
    }

    /// Fire every registered action for `(event, path)`, in registration
    /// order. Activating a path from inside a completion handler fires that
    /// path's own activation events in turn, so the dispatch runs a queue.
    fn dispatch(&mut self, id: CharacterId, event: PathEvent, path: usize) {
        let mut queue: VecDeque<(PathEvent, usize)> = VecDeque::new();
        queue.push_back((event, path));

        while let Some((event, path)) = queue.pop_front() {
            let actions: Vec<PathAction> = self
                .registrations
                .iter()
                .filter(|r| r.event == event && r.path == path)
                .map(|r| r.action)
                .collect();
            for action in actions {
                match action {
                    PathAction::SetLayer(layer) => self.cells[id.0].layer = layer,
                    PathAction::ActivatePath(next) => {
                        self.begin_path(id, next.0);
                        queue.push_back((PathEvent::Activated, next.0));
                    }
                    PathAction::ActivateScene(scene) => {
                        self.scenes[scene.0].scene.activate();
                        self.active_scene[id.0] = Some(scene.0);
                        self.apply_scene_frame(id, scene.0);
                    }
                }
            }
        }
    }
}

impl Stage for TerminalStage {
    fn characters(&self) -> Vec<CharacterId> {
        self.cells.iter().map(|c| c.id).collect()
    }

    fn origin(&self, id: CharacterId) -> Coord {
        self.cells[id.0].origin
    }

    fn symbol(&self, id: CharacterId) -> char {
        self.cells[id.0].symbol
    }

    fn is_alive(&self, id: CharacterId) -> bool {
        if self.active_motion[id.0].is_some() {
            return true;
        }
        match self.active_scene[id.0] {
            Some(scene) => !self.scenes[scene].scene.is_complete(),
            None => false,
        }
    }

    fn bounds(&self) -> CanvasBounds {
        self.bounds
    }

    fn set_start_coordinate(&mut self, id: CharacterId, coord: Coord) {
        self.cells[id.0].position = (f32::from(coord.column), f32::from(coord.row));
    }

    fn new_path(&mut self, _id: CharacterId, speed: f32, easing: EasingFunction) -> PathHandle {
        self.paths.push(PathEntry {
            spec: PathSpec::new(speed, easing),
        });
        PathHandle(self.paths.len() - 1)
    }

    fn add_waypoint(&mut self, _id: CharacterId, path: PathHandle, coord: Coord) {
        self.paths[path.0].spec.waypoints.push(Waypoint {
            target: coord,
            control: None,
        });
    }

    fn add_curved_waypoint(
        &mut self,
        _id: CharacterId,
        path: PathHandle,
        coord: Coord,
        control: Coord,
    ) {
        self.paths[path.0].spec.waypoints.push(Waypoint {
            target: coord,
            control: Some(control),
        });
    }

    fn activate_path(&mut self, id: CharacterId, path: PathHandle) {
        self.begin_path(id, path.0);
        self.dispatch(id, PathEvent::Activated, path.0);
    }

    fn new_scene(&mut self, _id: CharacterId) -> SceneHandle {
        self.scenes.push(SceneEntry {
            scene: Scene::new(),
        });
        SceneHandle(self.scenes.len() - 1)
    }

    fn apply_gradient_scene(
        &mut self,
        id: CharacterId,
        scene: SceneHandle,
        gradient: &Gradient,
        hold_frames: u32,
    ) {
        let symbol = self.cells[id.0].symbol;
        self.scenes[scene.0]
            .scene
            .push_gradient(symbol, gradient, hold_frames);
    }

    fn add_scene_frame(
        &mut self,
        _id: CharacterId,
        scene: SceneHandle,
        symbol: char,
        hold_frames: u32,
        color: Rgb,
    ) {
        self.scenes[scene.0].scene.push_frame(symbol, color, hold_frames);
    }

    fn set_scene_looping(&mut self, _id: CharacterId, scene: SceneHandle, looping: bool) {
        self.scenes[scene.0].scene.set_looping(looping);
    }

    fn activate_scene(&mut self, id: CharacterId, scene: SceneHandle) {
        self.scenes[scene.0].scene.activate();
        self.active_scene[id.0] = Some(scene.0);
        self.apply_scene_frame(id, scene.0);
    }

    fn register_path_event(
        &mut self,
        _id: CharacterId,
        event: PathEvent,
        path: PathHandle,
        action: PathAction,
    ) {
        self.registrations.push(Registration {
            event,
            path: path.0,
            action,
        });
    }

    fn set_visible(&mut self, id: CharacterId, visible: bool) {
        self.cells[id.0].visible = visible;
    }

    fn render_frame(&mut self) {
        let mut frame: Vec<RenderedCell> = self
            .cells
            .iter()
            .filter(|c| c.visible)
            .map(|c| {
                let position = c.rounded_position();
                RenderedCell {
                    column: position.column,
                    row: position.row,
                    symbol: c.shown_symbol,
                    color: c.color,
                    layer: c.layer,
                }
            })
            .collect();
        frame.sort_by_key(|c| (c.layer, c.row, c.column));
        self.last_frame = frame;
        self.frames_rendered += 1;
    }

    fn tick_character(&mut self, id: CharacterId) {
        if let Some(mut active) = self.active_motion[id.0].take() {
            active.state.tick();
            self.cells[id.0].position = active.state.position(&self.paths[active.path].spec);
            if active.state.is_complete() {
                let path = active.path;
                self.dispatch(id, PathEvent::Complete, path);
            } else {
                self.active_motion[id.0] = Some(active);
            }
        }

        if let Some(scene) = self.active_scene[id.0] {
            self.scenes[scene].scene.tick();
            self.apply_scene_frame(id, scene);
        }
    }
}

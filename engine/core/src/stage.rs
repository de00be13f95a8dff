//! Stage Boundary Contract
//!
//! The engine never owns character internals. A rendering surface implements
//! [`Stage`] and keeps the glyphs, their motion state, and their appearance
//! scenes; the engine addresses characters through stable [`CharacterId`]s
//! and registers paths, scenes, and event hooks through opaque handles.
//!
//! The one ordering rule a stage can rely on: within a tick, characters are
//! made visible before the frame is rendered, and the frame is rendered
//! before any character is advanced.

use serde::{Deserialize, Serialize};

use crate::easing::EasingFunction;
use crate::geometry::Coord;
use crate::graphics::{Gradient, Rgb};
use crate::schedule::{Group, TraversalOrder};

/// Stable identifier for one character on the stage.
///
/// Stages hand these out in reading order (top line first, left to right)
/// and must keep them valid for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CharacterId(pub usize);

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "char#{}", self.0)
    }
}

/// Opaque handle to a registered motion path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathHandle(pub usize);

/// Opaque handle to a registered appearance scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub usize);

/// Moments in a path's life that can trigger a registered action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathEvent {
    /// The path became the character's active path
    Activated,
    /// The character reached the path's final waypoint
    Complete,
}

/// Actions a stage performs when a registered path event fires.
///
/// These are declarative (trigger, action) pairs attached at preparation
/// time; the engine never inspects their outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathAction {
    /// Move the character to the given draw layer (higher is on top)
    SetLayer(u8),
    /// Activate another registered path
    ActivatePath(PathHandle),
    /// Activate another registered scene
    ActivateScene(SceneHandle),
}

/// The bounding extent of the output canvas, immutable for one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasBounds {
    /// Topmost row index (row 0 is the bottom line)
    pub top: u16,
    /// Rightmost column index (column 0 is the left edge)
    pub right: u16,
}

impl CanvasBounds {
    /// Create canvas bounds from the topmost row and rightmost column
    #[must_use]
    pub const fn new(top: u16, right: u16) -> Self {
        Self { top, right }
    }

    /// The center cell of the canvas
    #[must_use]
    pub const fn center(&self) -> Coord {
        Coord::new(self.right / 2, self.top / 2)
    }
}

/// The external character/terminal engine the effect engine drives.
///
/// Everything behind this trait is a black box: motion interpolation,
/// easing arithmetic, color blending during scene playback, and the actual
/// frame output. The engine only registers intent during preparation and
/// then, every tick, toggles visibility, requests frames, advances
/// characters, and polls liveness.
pub trait Stage {
    /// All characters in stable reading order
    fn characters(&self) -> Vec<CharacterId>;

    /// A character's immutable origin coordinate (its resting cell)
    fn origin(&self, id: CharacterId) -> Coord;

    /// The character's input symbol
    fn symbol(&self, id: CharacterId) -> char;

    /// Whether the character's motion and scene playback are still running.
    ///
    /// The engine polls this after advancing to retire finished characters.
    fn is_alive(&self, id: CharacterId) -> bool;

    /// The canvas extent, immutable for the duration of a run
    fn bounds(&self) -> CanvasBounds;

    /// Park the character at a coordinate before its first path activates
    fn set_start_coordinate(&mut self, id: CharacterId, coord: Coord);

    /// Register a new empty motion path
    fn new_path(&mut self, id: CharacterId, speed: f32, easing: EasingFunction) -> PathHandle;

    /// Append a straight-line waypoint to a path
    fn add_waypoint(&mut self, id: CharacterId, path: PathHandle, coord: Coord);

    /// Append a waypoint reached along a quadratic bezier through `control`
    fn add_curved_waypoint(
        &mut self,
        id: CharacterId,
        path: PathHandle,
        coord: Coord,
        control: Coord,
    );

    /// Make a registered path the character's active path
    fn activate_path(&mut self, id: CharacterId, path: PathHandle);

    /// Register a new empty appearance scene
    fn new_scene(&mut self, id: CharacterId) -> SceneHandle;

    /// Fill a scene with one frame per gradient spectrum color, each shown
    /// for `hold_frames` ticks, using the character's own symbol
    fn apply_gradient_scene(
        &mut self,
        id: CharacterId,
        scene: SceneHandle,
        gradient: &Gradient,
        hold_frames: u32,
    );

    /// Append a single frame (symbol, hold count, color) to a scene
    fn add_scene_frame(
        &mut self,
        id: CharacterId,
        scene: SceneHandle,
        symbol: char,
        hold_frames: u32,
        color: Rgb,
    );

    /// Make a scene repeat from its first frame instead of completing
    fn set_scene_looping(&mut self, id: CharacterId, scene: SceneHandle, looping: bool);

    /// Make a registered scene the character's active scene
    fn activate_scene(&mut self, id: CharacterId, scene: SceneHandle);

    /// Attach a declarative (trigger, action) pair, executed by the stage
    /// when the event fires; fire-and-forget from the engine's view
    fn register_path_event(
        &mut self,
        id: CharacterId,
        event: PathEvent,
        path: PathHandle,
        action: PathAction,
    );

    /// Make a character eligible (or ineligible) for rendering
    fn set_visible(&mut self, id: CharacterId, visible: bool);

    /// Emit one frame; side-effecting, nothing is returned to the engine
    fn render_frame(&mut self);

    /// Advance one tick of the character's motion and scene state
    fn tick_character(&mut self, id: CharacterId);

    /// Partition all characters into ordered groups along a traversal order.
    ///
    /// The default implementation uses the deterministic partition over
    /// origin coordinates; stages only override this if they carry their
    /// own grouping metadata.
    fn grouped_by(&self, order: TraversalOrder) -> Vec<Group> {
        let pairs: Vec<(CharacterId, Coord)> = self
            .characters()
            .into_iter()
            .map(|id| (id, self.origin(id)))
            .collect();
        order.partition(&pairs)
    }
}

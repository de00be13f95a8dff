//! textfx Core - Headless Text-Effect Engine
//!
//! This crate decides, frame by frame, which characters of a piece of text
//! are visible, where each one currently sits, and what color transition it
//! is undergoing, until every character reaches its resting appearance. It
//! is completely independent of any terminal or UI framework: a rendering
//! surface plugs in through the [`Stage`] trait and owns the actual glyph
//! movement, scene playback, and frame output.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                      Rendering Surfaces                       │
//! │   ┌───────────────┐  ┌──────────────┐  ┌──────────────────┐  │
//! │   │ Terminal (TUI)│  │  Mock Stage  │  │  Anything else   │  │
//! │   └───────┬───────┘  └──────┬───────┘  └────────┬─────────┘  │
//! │           └─────────────────┴─────────────────── ┘           │
//! │                        Stage trait                            │
//! └───────────────────────────┬──────────────────────────────────┘
//!                             │
//! ┌───────────────────────────┼──────────────────────────────────┐
//! │                      TEXTFX CORE                              │
//! │  ┌────────────────────────┴───────────────────────────────┐  │
//! │  │                    EffectRunner                         │  │
//! │  │  ┌───────────┐ ┌──────────────┐ ┌───────────────────┐  │  │
//! │  │  │ Schedule  │ │ LifecycleSet │ │  ColorAssigner    │  │  │
//! │  │  │ Policy    │ │ pend/act/set │ │  (per-char color) │  │  │
//! │  │  └───────────┘ └──────────────┘ └───────────────────┘  │  │
//! │  └────────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Key Types
//!
//! - [`Stage`]: the boundary trait a rendering surface implements
//! - [`EffectRunner`]: the tick loop (activate → render → advance → reap)
//! - [`LifecycleSet`]: pending / active / settled character partitions
//! - [`SchedulePolicy`]: how characters are batched into release groups
//! - [`ColorAssigner`]: per-character final color planning
//! - [`Gradient`] / [`Rgb`]: multi-stop color ramps
//!
//! # Quick Start
//!
//! ```ignore
//! use textfx_core::effects::{wipe, WipeConfig};
//!
//! let mut stage = my_surface::TerminalStage::from_text("hello")?;
//! let config = WipeConfig::default();
//! let mut runner = wipe::prepare(&mut stage, &config)?;
//! runner.run(&mut stage);
//! ```
//!
//! # Module Overview
//!
//! - [`geometry`]: canvas coordinates and the few spatial helpers effects use
//! - [`graphics`]: RGB colors and multi-stop gradients
//! - [`easing`]: easing curves, passed opaquely to the stage's motion system
//! - [`stage`]: the external-engine boundary contract
//! - [`position`]: normalized vertical position sampling
//! - [`coloring`]: fraction-to-color planning with an owned per-character table
//! - [`schedule`]: traversal orders and group-building policies
//! - [`lifecycle`]: pending/active/settled bookkeeping and stagger countdown
//! - [`runner`]: the frame loop state machine
//! - [`effects`]: the built-in effects (expand, wipe, fireworks)
//!
//! # No Rendering Dependencies
//!
//! This crate has **zero** dependencies on any terminal UI or rendering
//! framework. It is pure choreography logic that can drive a
//! terminal, a test double, or anything that can show colored glyphs.

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod coloring;
pub mod easing;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod lifecycle;
pub mod position;
pub mod runner;
pub mod schedule;
pub mod stage;

// Re-exports for convenience
pub use coloring::ColorAssigner;
pub use easing::EasingFunction;
pub use error::ConfigError;
pub use geometry::Coord;
pub use graphics::{Gradient, ParseColorError, Rgb};
pub use lifecycle::LifecycleSet;
pub use position::PositionSampler;
pub use runner::{EffectRunner, RunState};
pub use schedule::{Group, SchedulePolicy, TraversalOrder};
pub use stage::{
    CanvasBounds, CharacterId, PathAction, PathEvent, PathHandle, SceneHandle, Stage,
};

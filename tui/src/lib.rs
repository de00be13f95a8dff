//! textfx TUI - Terminal rendering surface for the textfx engine
//!
//! This crate owns everything the headless engine deliberately does not:
//! glyph motion and easing playback, scene (appearance) playback, frame
//! painting through ratatui, and the interactive playback loop.
//!
//! # Architecture
//!
//! - **Cell**: input text parsed into positioned characters
//! - **Motion**: path playback with easing and bezier segments
//! - **Scenes**: symbol/color frame sequences with hold counts
//! - **Stage**: the `textfx_core::Stage` implementation tying it together
//! - **Render**: painting frame snapshots into a ratatui buffer
//! - **App**: the terminal session and per-frame tick loop

pub mod app;
pub mod cell;
pub mod motion;
pub mod render;
pub mod scenes;
pub mod stage;

pub use app::EffectKind;
pub use stage::TerminalStage;

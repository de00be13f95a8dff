//! Built-in Effects
//!
//! Each effect is one instance of the same pattern: derive a spatial and
//! temporal schedule from every character's resting position, register the
//! character's motion paths and appearance scenes with the stage during a
//! one-time preparation phase, then hand the scheduled groups to an
//! [`EffectRunner`](crate::runner::EffectRunner) that activates, advances,
//! and retires characters tick by tick.
//!
//! - [`expand`]: every character flies out from the canvas center to its
//!   resting cell while fading to its final color
//! - [`wipe`]: a directional sweep reveals characters column by column,
//!   row by row, or diagonal by diagonal
//! - [`fireworks`]: characters launch in shells, explode, and fall into
//!   place

pub mod expand;
pub mod fireworks;
pub mod wipe;

pub use expand::ExpandConfig;
pub use fireworks::FireworksConfig;
pub use wipe::WipeConfig;

//! Scene Playback
//!
//! A scene is an ordered list of appearance frames, each holding a symbol
//! and color for a number of ticks. Non-looping scenes freeze on their last
//! frame once exhausted; looping scenes wrap and never complete.

use textfx_core::{Gradient, Rgb};

/// One appearance frame
#[derive(Debug, Clone, Copy)]
pub struct SceneFrame {
    /// Glyph shown while this frame is held
    pub symbol: char,
    /// Color shown while this frame is held
    pub color: Rgb,
    /// Ticks this frame stays on screen; zero-hold frames are skipped
    pub hold: u32,
}

/// A registered appearance scene and its playback cursor
#[derive(Debug, Clone)]
pub struct Scene {
    frames: Vec<SceneFrame>,
    looping: bool,
    cursor: usize,
    ticks_in_frame: u32,
    exhausted: bool,
}

impl Scene {
    /// Create an empty scene; empty scenes are complete immediately
    pub fn new() -> Self {
        Self {
            frames: Vec::new(),
            looping: false,
            cursor: 0,
            ticks_in_frame: 0,
            exhausted: false,
        }
    }

    /// Append one frame
    pub fn push_frame(&mut self, symbol: char, color: Rgb, hold: u32) {
        self.frames.push(SceneFrame {
            symbol,
            color,
            hold,
        });
    }

    /// Append one frame per gradient spectrum color
    pub fn push_gradient(&mut self, symbol: char, gradient: &Gradient, hold: u32) {
        for &color in gradient.spectrum() {
            self.push_frame(symbol, color, hold);
        }
    }

    /// Make the scene wrap instead of completing
    pub fn set_looping(&mut self, looping: bool) {
        self.looping = looping;
    }

    /// Restart playback from the first frame
    pub fn activate(&mut self) {
        self.cursor = 0;
        self.ticks_in_frame = 0;
        self.exhausted = false;
    }

    /// The frame currently held, if the scene has any
    pub fn current(&self) -> Option<SceneFrame> {
        self.frames.get(self.cursor).copied()
    }

    /// Whether playback has exhausted a non-looping scene
    pub fn is_complete(&self) -> bool {
        self.frames.is_empty() || (!self.looping && self.exhausted)
    }

    /// Advance one tick of playback
    pub fn tick(&mut self) {
        if self.frames.is_empty() || self.exhausted {
            return;
        }
        self.ticks_in_frame += 1;
        if self.ticks_in_frame < self.frames[self.cursor].hold {
            return;
        }
        self.ticks_in_frame = 0;
        if self.cursor + 1 < self.frames.len() {
            self.cursor += 1;
        } else if self.looping {
            self.cursor = 0;
        } else {
            // Freeze on the last frame.
            self.exhausted = true;
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

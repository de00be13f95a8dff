//! Frame Painting
//!
//! Paints the stage's latest frame snapshot into a ratatui buffer. The
//! engine's canvas has row 0 at the bottom, so rows are flipped into screen
//! coordinates here and nowhere else. The snapshot arrives sorted by layer,
//! so painting in order gives higher layers the last word on a cell.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::stage::TerminalStage;

/// A ratatui widget that paints the stage's last rendered frame
pub struct EffectCanvas<'a> {
    stage: &'a TerminalStage,
}

impl<'a> EffectCanvas<'a> {
    /// Paint the given stage's latest frame
    pub fn new(stage: &'a TerminalStage) -> Self {
        Self { stage }
    }
}

impl Widget for EffectCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for cell in self.stage.last_frame() {
            if cell.column >= area.width || cell.row >= area.height {
                continue;
            }
            let x = area.x + cell.column;
            let y = area.y + (area.height - 1 - cell.row);
            if let Some(target) = buf.cell_mut((x, y)) {
                target.set_char(cell.symbol);
                target.set_fg(Color::Rgb(cell.color.r, cell.color.g, cell.color.b));
            }
        }
    }
}

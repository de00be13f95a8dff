//! Character Cells
//!
//! Turns input text into staged characters. The last line of the input sits
//! on canvas row 0 (the bottom line) so that earlier lines stack upward,
//! matching the engine's coordinate system. Columns follow display width:
//! a double-width glyph occupies two columns and the next character starts
//! after it.

use textfx_core::{CharacterId, Coord, Rgb};
use unicode_width::UnicodeWidthChar;

/// One character of input text with its render state
#[derive(Debug, Clone)]
pub struct Cell {
    /// Stable identifier, assigned in reading order
    pub id: CharacterId,
    /// The input glyph
    pub symbol: char,
    /// The resting coordinate this character finally occupies
    pub origin: Coord,
    /// Current position in fractional cells, rounded at render time
    pub position: (f32, f32),
    /// Glyph currently shown, swapped by scene playback
    pub shown_symbol: char,
    /// Color currently shown, swapped by scene playback
    pub color: Rgb,
    /// Draw layer; higher layers paint over lower ones
    pub layer: u8,
    /// Whether the character is eligible for rendering
    pub visible: bool,
}

impl Cell {
    fn new(id: CharacterId, symbol: char, origin: Coord) -> Self {
        Self {
            id,
            symbol,
            origin,
            position: (f32::from(origin.column), f32::from(origin.row)),
            shown_symbol: symbol,
            color: Rgb::new(0xFF, 0xFF, 0xFF),
            layer: 0,
            visible: false,
        }
    }

    /// The cell's position rounded to a whole coordinate
    pub fn rounded_position(&self) -> Coord {
        Coord::new(
            self.position.0.round().max(0.0) as u16,
            self.position.1.round().max(0.0) as u16,
        )
    }
}

/// Parse input text into cells, skipping whitespace.
///
/// Lines are laid out bottom-up: the last input line becomes row 0. Ids are
/// assigned in reading order (top line first, left to right), which is the
/// order the engine expects from `Stage::characters`.
pub fn parse_text(text: &str) -> Vec<Cell> {
    let lines: Vec<&str> = text.lines().collect();
    let top = lines.len().saturating_sub(1);

    let mut cells = Vec::new();
    for (line_index, line) in lines.iter().enumerate() {
        let row = (top - line_index) as u16;
        let mut column: u16 = 0;
        for symbol in line.chars() {
            let width = symbol.width().unwrap_or(0) as u16;
            if !symbol.is_whitespace() && width > 0 {
                let id = CharacterId(cells.len());
                cells.push(Cell::new(id, symbol, Coord::new(column, row)));
            }
            column += width.max(1);
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_last_line_is_row_zero() {
        let cells = parse_text("ab\ncd");
        assert_eq!(cells[0].symbol, 'a');
        assert_eq!(cells[0].origin, Coord::new(0, 1));
        assert_eq!(cells[3].symbol, 'd');
        assert_eq!(cells[3].origin, Coord::new(1, 0));
    }

    #[test]
    fn test_whitespace_is_skipped_but_advances_columns() {
        let cells = parse_text("a b");
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].origin, Coord::new(2, 0));
    }

    #[test]
    fn test_wide_glyphs_take_two_columns() {
        let cells = parse_text("宽x");
        assert_eq!(cells[0].origin, Coord::new(0, 0));
        assert_eq!(cells[1].origin, Coord::new(2, 0));
    }

    #[test]
    fn test_ids_follow_reading_order() {
        let cells = parse_text("ab\ncd");
        let ids: Vec<usize> = cells.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_empty_text_yields_no_cells() {
        assert!(parse_text("").is_empty());
        assert!(parse_text("   \n  ").is_empty());
    }
}

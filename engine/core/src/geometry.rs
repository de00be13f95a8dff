//! Canvas Coordinates
//!
//! Cell coordinates on the output canvas. Row 0 is the bottom line and rows
//! grow upward, so a character's row divided by the canvas top extent gives
//! its normalized vertical position directly.

use serde::{Deserialize, Serialize};

/// A single character cell position on the canvas.
///
/// # Examples
///
/// ```
/// use textfx_core::geometry::Coord;
///
/// let c = Coord::new(3, 1);
/// assert_eq!(c.column, 3);
/// assert_eq!(c.row, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Column index, 0 at the left edge
    pub column: u16,
    /// Row index, 0 at the bottom line, growing upward
    pub row: u16,
}

impl Coord {
    /// Create a coordinate from column and row
    #[must_use]
    pub const fn new(column: u16, row: u16) -> Self {
        Self { column, row }
    }

    /// Euclidean distance to another coordinate
    #[must_use]
    pub fn distance_to(self, other: Coord) -> f32 {
        let dx = f32::from(other.column) - f32::from(self.column);
        let dy = f32::from(other.row) - f32::from(self.row);
        dx.hypot(dy)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

/// All cell coordinates within `radius` of `origin` (inclusive).
///
/// Cells that would fall off the left or bottom edge are clipped. The origin
/// itself is included. Used to pick burst targets around a detonation point.
#[must_use]
pub fn find_coords_in_circle(origin: Coord, radius: u16) -> Vec<Coord> {
    let mut coords = Vec::new();
    let r = i32::from(radius);
    let ox = i32::from(origin.column);
    let oy = i32::from(origin.row);
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let x = ox + dx;
            let y = oy + dy;
            if x < 0 || y < 0 {
                continue;
            }
            coords.push(Coord::new(x as u16, y as u16));
        }
    }
    coords
}

/// The coordinate `distance` cells beyond `target` along the `origin` →
/// `target` ray, clipped to the canvas quadrant.
///
/// If `origin` and `target` coincide there is no direction; `target` is
/// returned unchanged.
#[must_use]
pub fn find_coord_at_distance(origin: Coord, target: Coord, distance: u16) -> Coord {
    let total = origin.distance_to(target);
    if total == 0.0 {
        return target;
    }
    let dx = (f32::from(target.column) - f32::from(origin.column)) / total;
    let dy = (f32::from(target.row) - f32::from(origin.row)) / total;
    let x = f32::from(target.column) + dx * f32::from(distance);
    let y = f32::from(target.row) + dy * f32::from(distance);
    Coord::new(x.round().max(0.0) as u16, y.round().max(0.0) as u16)
}

use serde::Serialize;

use crate::geometry::Point;

/// A square sitting on the board. `x`/`y` are grid-aligned pixel offsets of
/// the top-left corner; `size` is in grid units.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PlacedPiece {
    pub x: i32,
    pub y: i32,
    pub size: i32,
    pub color: String,
}

impl PlacedPiece {
    pub fn side(&self, unit: i32) -> i32 {
        self.size * unit
    }

    /// Half-open containment: the left and top edges belong to the piece,
    /// the right and bottom edges do not.
    pub fn contains(&self, p: Point, unit: i32) -> bool {
        let side = f64::from(self.side(unit));
        let (x, y) = (f64::from(self.x), f64::from(self.y));
        p.x >= x && p.x < x + side && p.y >= y && p.y < y + side
    }

    pub fn origin(&self) -> Point {
        Point {
            x: f64::from(self.x),
            y: f64::from(self.y),
        }
    }
}

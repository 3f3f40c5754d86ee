use serde::Serialize;

/// Board-relative pointer position in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl From<(f64, f64)> for Point {
    fn from(v: (f64, f64)) -> Self {
        Point { x: v.0, y: v.1 }
    }
}

impl Point {
    pub fn offset_by(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Round `v` down to the nearest multiple of `unit`.
///
/// Uses a true floor, so `-1` snaps to `-unit` rather than `0`.
pub fn snap(v: f64, unit: i32) -> i32 {
    let u = f64::from(unit);
    ((v / u).floor() * u) as i32
}

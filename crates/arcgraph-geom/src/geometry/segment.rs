use crate::geom::Point;
use serde::Serialize;

/// A line in integer surface coordinates, ready to hand to a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct LineSegment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl LineSegment {
    pub fn between(start: Point, end: Point) -> Self {
        Self {
            x1: round_coord(start.x),
            y1: round_coord(start.y),
            x2: round_coord(end.x),
            y2: round_coord(end.y),
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.x1 == self.x2 && self.y1 == self.y2
    }
}

/// Rounds half up (`-2.5 -> -2`, `2.5 -> 3`). Non-finite values map to 0; out-of-range values
/// saturate.
pub fn round_coord(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    (v + 0.5).floor() as i32
}

//! Straight-edge geometry: body line, arrowhead wings and label anchor.
//!
//! Everything stays in `f64` until [`LineSegment::between`] rounds the final endpoints.

mod clip;
mod segment;

pub use segment::{LineSegment, round_coord};

use crate::config::GeometryConfig;
use crate::geom::{Point, Size, Vector, point, vector};
use crate::node::NodeGeometry;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrowhead {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

impl Arrowhead {
    pub fn left_segment(&self) -> LineSegment {
        LineSegment::between(self.tip, self.left)
    }

    pub fn right_segment(&self) -> LineSegment {
        LineSegment::between(self.tip, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcGeometry {
    /// Source center to destination center. Not shortened to the tip.
    pub body: LineSegment,
    pub head_left: LineSegment,
    pub head_right: LineSegment,
    pub tip: Point,
    /// Top-left corner of the label box.
    pub label_anchor: Point,
}

/// Angle of the `from -> to` direction in radians; 0 for coincident points.
pub fn edge_angle(from: Point, to: Point) -> f64 {
    let d = to - from;
    if d.x == 0.0 && d.y == 0.0 {
        return 0.0;
    }
    d.y.atan2(d.x)
}

/// Counter-clockwise rotation in a y-up frame (clockwise on a y-down screen).
pub fn rotate(v: Vector, angle: f64) -> Vector {
    let (sin, cos) = angle.sin_cos();
    vector(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

pub fn compute_arrowhead(
    from: &NodeGeometry,
    to: &NodeGeometry,
    config: &GeometryConfig,
) -> Arrowhead {
    let tip = config.clip.tip(from.center, to);

    let angle = edge_angle(from.center, to.center);
    let length = config.arrowhead_length;
    let width = config.arrowhead_width;
    let left = tip + rotate(vector(-length, -width), angle);
    let right = tip + rotate(vector(-length, width), angle);

    Arrowhead { tip, left, right }
}

/// Top-left corner of a `label_size` box centered `position` of the way from `from` to `tip`.
pub fn label_anchor(from: Point, tip: Point, label_size: Size, position: f64) -> Point {
    let along = |a: f64, b: f64| (1.0 - position) * a + position * b;
    point(
        along(from.x, tip.x) - label_size.width / 2.0,
        along(from.y, tip.y) - label_size.height / 2.0,
    )
}

pub fn compute_arc(
    from: &NodeGeometry,
    to: &NodeGeometry,
    label_size: Size,
    config: &GeometryConfig,
) -> ArcGeometry {
    let head = compute_arrowhead(from, to, config);
    ArcGeometry {
        body: LineSegment::between(from.center, to.center),
        head_left: head.left_segment(),
        head_right: head.right_segment(),
        tip: head.tip,
        label_anchor: label_anchor(from.center, head.tip, label_size, config.label_position),
    }
}

//! Arrow tip placement on the destination's bounding box.

use crate::config::ClipStrategy;
use crate::geom::{Point, manhattan, point};
use crate::node::NodeGeometry;

impl ClipStrategy {
    /// Where an edge coming from `from` should end on `to`'s box.
    pub fn tip(self, from: Point, to: &NodeGeometry) -> Point {
        match self {
            ClipStrategy::AxisNearest => axis_nearest(from, to),
            ClipStrategy::ExactRect => exact_rect(from, to),
        }
    }
}

/// Clamps the source onto the destination's horizontal extent, then separately onto its
/// vertical extent, solving the other coordinate on the line each time. The candidate closest
/// to the destination center wins, provided it beats the source's own distance. A zero
/// delta on an axis skips that axis.
fn axis_nearest(from: Point, to: &NodeGeometry) -> Point {
    let center = to.center;
    let dx = center.x - from.x;
    let dy = center.y - from.y;
    let (half_w, half_h) = to.half_extents();

    let mut tip = center;
    let mut best = manhattan(from, center);

    if dx != 0.0 {
        let x = from.x.max(center.x - half_w).min(center.x + half_w);
        let candidate = point(x, from.y + dy * (x - from.x) / dx);
        let d = manhattan(candidate, center);
        if d < best {
            best = d;
            tip = candidate;
        }
    }

    if dy != 0.0 {
        let y = from.y.max(center.y - half_h).min(center.y + half_h);
        let candidate = point(from.x + dx * (y - from.y) / dy, y);
        if manhattan(candidate, center) < best {
            tip = candidate;
        }
    }

    tip
}

/// Intersection of the ray from the destination center towards `from` with the box outline.
/// A source inside the box (or on the center) yields the center.
fn exact_rect(from: Point, to: &NodeGeometry) -> Point {
    let center = to.center;
    let dx = from.x - center.x;
    let dy = from.y - center.y;
    let (w, h) = to.half_extents();

    if dx.abs() <= w && dy.abs() <= h {
        return center;
    }

    // `dx == 0` forces the horizontal faces; `dy` is non-zero there because `from` is outside.
    let (sx, sy) = if dx == 0.0 || dy.abs() * w > dx.abs() * h {
        let h = if dy < 0.0 { -h } else { h };
        (h * dx / dy, h)
    } else {
        let w = if dx < 0.0 { -w } else { w };
        (w, w * dy / dx)
    };

    point(center.x + sx, center.y + sy)
}

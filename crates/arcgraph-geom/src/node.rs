use crate::error::{Error, Result};
use crate::geom::{Point, Size, point, size};

/// By-value snapshot of a node's center and bounding-box size, taken right before a
/// geometry computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeGeometry {
    pub center: Point,
    pub size: Size,
}

impl NodeGeometry {
    /// Rejects NaN/infinite inputs. Negative extents are clamped to zero.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self> {
        for (field, value) in [("x", x), ("y", y), ("width", width), ("height", height)] {
            if !value.is_finite() {
                return Err(Error::NonFinite { field });
            }
        }
        Ok(Self {
            center: point(x, y),
            size: size(width.max(0.0), height.max(0.0)),
        })
    }

    /// Like [`NodeGeometry::new`], but non-finite inputs become 0 instead of failing.
    pub fn sanitized(x: f64, y: f64, width: f64, height: f64) -> Self {
        let finite = |v: f64| if v.is_finite() { v } else { 0.0 };
        Self {
            center: point(finite(x), finite(y)),
            size: size(finite(width).max(0.0), finite(height).max(0.0)),
        }
    }

    /// Half width and half height, never negative.
    pub(crate) fn half_extents(&self) -> (f64, f64) {
        (
            self.size.width.max(0.0) / 2.0,
            self.size.height.max(0.0) / 2.0,
        )
    }
}

#![forbid(unsafe_code)]

//! Geometry for drawing a straight directed edge between two boxed nodes.
//!
//! Given snapshots of the source and destination nodes, [`compute_arc`] returns the body line
//! (center to center), the two arrowhead wings anchored where the edge meets the destination's
//! bounding box, and the top-left anchor for the edge label. The functions are pure; callers
//! recompute whenever an endpoint moves or resizes.
//!
//! ```
//! use arcgraph_geom::{GeometryConfig, LineSegment, NodeGeometry, compute_arc, size};
//!
//! let from = NodeGeometry::new(0.0, 0.0, 20.0, 10.0)?;
//! let to = NodeGeometry::new(100.0, 0.0, 20.0, 10.0)?;
//! let arc = compute_arc(&from, &to, size(20.0, 10.0), &GeometryConfig::default());
//!
//! assert_eq!(arc.body, LineSegment { x1: 0, y1: 0, x2: 100, y2: 0 });
//! assert_eq!(arc.head_left, LineSegment { x1: 90, y1: 0, x2: 80, y2: -5 });
//! assert_eq!((arc.label_anchor.x, arc.label_anchor.y), (62.0, -5.0));
//! # Ok::<(), arcgraph_geom::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod geom;
pub mod geometry;
pub mod node;

pub use config::{ClipStrategy, GeometryConfig};
pub use error::{Error, Result};
pub use geom::{Point, Size, Vector, point, size, vector};
pub use geometry::{
    ArcGeometry, Arrowhead, LineSegment, compute_arc, compute_arrowhead, edge_angle,
    label_anchor, rotate, round_coord,
};
pub use node::NodeGeometry;

#![forbid(unsafe_code)]

//! `arcgraph` is the headless edge layer of an interactive graph explorer.
//!
//! It combines a directed multigraph store ([`arcgraph_store`]) with straight-edge arrowhead
//! geometry ([`arcgraph_geom`]). A layout process moves nodes through the store; the
//! [`ArcPresenter`] then recomputes the lines and label anchor for the affected edges, which a
//! rendering surface draws.
//!
//! ```
//! use arcgraph::{ArcPresenter, Config, Edge, GraphStore, Node, size};
//!
//! let mut g = GraphStore::new();
//! g.add_vertex(Node::new("a").with_size(20.0, 10.0));
//! g.add_vertex(Node::new("b").at(100.0, 0.0).with_size(20.0, 10.0));
//! g.add_edge(Edge::new("a-b", "KNOWS").with_label("knows"), "a", "b")?;
//!
//! let presenter = ArcPresenter::new(&Config::default());
//! let arc = presenter.present(&g, "a-b", size(0.0, 0.0))?;
//! assert_eq!(arc.geometry.tip.x, 90.0);
//! assert_eq!(arc.title.as_deref(), Some("a-b"));
//! # Ok::<(), arcgraph::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod presenter;

pub use arcgraph_geom as geom;
pub use arcgraph_store as store;

pub use arcgraph_geom::{
    ArcGeometry, ClipStrategy, GeometryConfig, LineSegment, NodeGeometry, Point, Size, point,
    size,
};
pub use arcgraph_store::{Edge, GraphStore, Node};
pub use config::Config;
pub use error::{Error, Result};
pub use presenter::{ArcPresenter, ArcView, snapshot};

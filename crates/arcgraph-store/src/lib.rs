#![forbid(unsafe_code)]

//! In-memory directed multigraph used by the `arcgraph` edge presenter.
//!
//! Vertices and edges are addressed by caller-chosen string ids. Internally both live in
//! slot arenas and every adjacency set stores arena handles, never ids, so lookups do not
//! depend on object identity.
//!
//! ```
//! use arcgraph_store::{Edge, GraphStore, Node};
//!
//! let mut g = GraphStore::new();
//! g.add_vertex(Node::new("a"));
//! g.add_vertex(Node::new("b"));
//! assert_eq!(g.add_edge(Edge::new("a->b", "knows"), "a", "b"), Ok(true));
//! assert_eq!(g.degree("a"), 1);
//! assert!(g.remove_vertex("b"));
//! assert!(!g.contains_edge("a->b"));
//! ```

pub mod error;
pub mod model;
pub mod store;

pub use error::{Error, Result};
pub use model::{Edge, Node};
pub use store::GraphStore;

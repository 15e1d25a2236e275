//! The `GraphStore` container.
//!
//! Vertices and edges sit in slot arenas (`Vec<Option<_>>`) addressed by `usize` handles, with
//! `id -> handle` tables on top. Adjacency sets hold edge handles. A freed handle is recycled
//! only after every adjacency set and index entry pointing at it has been dropped.

mod entries;

use crate::error::{Error, Result};
use crate::model::{Edge, Node};
use entries::{AdjSet, EdgeEntry, VertexEntry, alloc_slot};
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    vertices: Vec<Option<VertexEntry>>,
    vertex_index: HashMap<String, usize>,
    free_vertices: Vec<usize>,

    edges: Vec<Option<EdgeEntry>>,
    edge_index: HashMap<String, usize>,
    free_edges: Vec<usize>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn vertex_entry(&self, ix: usize) -> Option<&VertexEntry> {
        self.vertices.get(ix).and_then(Option::as_ref)
    }

    fn vertex_entry_mut(&mut self, ix: usize) -> Option<&mut VertexEntry> {
        self.vertices.get_mut(ix).and_then(Option::as_mut)
    }

    fn edge_entry(&self, ix: usize) -> Option<&EdgeEntry> {
        self.edges.get(ix).and_then(Option::as_ref)
    }

    fn vertex_by_id(&self, id: &str) -> Option<&VertexEntry> {
        let &ix = self.vertex_index.get(id)?;
        self.vertex_entry(ix)
    }

    fn edge_by_id(&self, id: &str) -> Option<&EdgeEntry> {
        let &ix = self.edge_index.get(id)?;
        self.edge_entry(ix)
    }

    fn node_at(&self, ix: usize) -> Option<&Node> {
        self.vertex_entry(ix).map(|v| &v.node)
    }

    fn edges_at<'a>(
        &'a self,
        handles: impl IntoIterator<Item = usize> + 'a,
    ) -> impl Iterator<Item = &'a Edge> + 'a {
        handles
            .into_iter()
            .filter_map(move |ix| self.edge_entry(ix).map(|e| &e.edge))
    }

    /// Inserts `node` with empty in/out sets. Returns `false` (and changes nothing) when a
    /// vertex with the same id is already present.
    pub fn add_vertex(&mut self, node: Node) -> bool {
        if self.vertex_index.contains_key(node.id.as_str()) {
            return false;
        }
        tracing::trace!(vertex = %node.id, "add vertex");
        let id = node.id.clone();
        let ix = alloc_slot(
            &mut self.vertices,
            &mut self.free_vertices,
            VertexEntry::new(node),
        );
        self.vertex_index.insert(id, ix);
        true
    }

    /// Records `edge` from `source` to `dest`.
    ///
    /// Returns `Ok(false)` without touching the graph when the edge id is taken. Both endpoints
    /// must already be vertices; otherwise [`Error::InvalidReference`] is returned, again
    /// without any mutation.
    pub fn add_edge(&mut self, edge: Edge, source: &str, dest: &str) -> Result<bool> {
        if self.edge_index.contains_key(edge.id.as_str()) {
            return Ok(false);
        }
        let missing = |vertex_id: &str| Error::InvalidReference {
            edge_id: edge.id.clone(),
            vertex_id: vertex_id.to_string(),
        };
        let source_ix = *self
            .vertex_index
            .get(source)
            .ok_or_else(|| missing(source))?;
        let dest_ix = *self.vertex_index.get(dest).ok_or_else(|| missing(dest))?;

        tracing::trace!(edge = %edge.id, source, dest, "add edge");
        let id = edge.id.clone();
        let ix = alloc_slot(
            &mut self.edges,
            &mut self.free_edges,
            EdgeEntry {
                edge,
                source: source_ix,
                dest: dest_ix,
            },
        );
        self.edge_index.insert(id, ix);
        if let Some(v) = self.vertex_entry_mut(dest_ix) {
            v.in_edges.insert(ix);
        }
        if let Some(v) = self.vertex_entry_mut(source_ix) {
            v.out_edges.insert(ix);
        }
        Ok(true)
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.vertex_index.contains_key(id)
    }

    pub fn contains_edge(&self, id: &str) -> bool {
        self.edge_index.contains_key(id)
    }

    pub fn vertex(&self, id: &str) -> Option<&Node> {
        self.vertex_by_id(id).map(|v| &v.node)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edge_by_id(id).map(|e| &e.edge)
    }

    /// Moves a vertex. Returns `false` for an unknown id.
    pub fn set_position(&mut self, id: &str, x: f64, y: f64) -> bool {
        let Some(&ix) = self.vertex_index.get(id) else {
            return false;
        };
        let Some(v) = self.vertex_entry_mut(ix) else {
            return false;
        };
        v.node.x = x;
        v.node.y = y;
        true
    }

    /// Resizes a vertex; negative extents are clamped to zero. Returns `false` for an unknown id.
    pub fn set_size(&mut self, id: &str, width: f64, height: f64) -> bool {
        let Some(&ix) = self.vertex_index.get(id) else {
            return false;
        };
        let Some(v) = self.vertex_entry_mut(ix) else {
            return false;
        };
        v.node.width = width.max(0.0);
        v.node.height = height.max(0.0);
        true
    }

    pub fn source(&self, edge_id: &str) -> Option<&Node> {
        self.edge_by_id(edge_id).and_then(|e| self.node_at(e.source))
    }

    pub fn dest(&self, edge_id: &str) -> Option<&Node> {
        self.edge_by_id(edge_id).and_then(|e| self.node_at(e.dest))
    }

    /// `(source, dest)` of an edge.
    pub fn endpoints(&self, edge_id: &str) -> Option<(&Node, &Node)> {
        let e = self.edge_by_id(edge_id)?;
        Some((self.node_at(e.source)?, self.node_at(e.dest)?))
    }

    /// Edges pointing at `id`. Empty for an unknown vertex.
    pub fn in_edges(&self, id: &str) -> Vec<&Edge> {
        match self.vertex_by_id(id) {
            Some(v) => self.edges_at(v.in_edges.iter().copied()).collect(),
            None => Vec::new(),
        }
    }

    /// Edges leaving `id`. Empty for an unknown vertex.
    pub fn out_edges(&self, id: &str) -> Vec<&Edge> {
        match self.vertex_by_id(id) {
            Some(v) => self.edges_at(v.out_edges.iter().copied()).collect(),
            None => Vec::new(),
        }
    }

    /// In-edges followed by out-edges, each edge once (self-loops are listed a single time).
    pub fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        let Some(v) = self.vertex_by_id(id) else {
            return Vec::new();
        };
        let handles: AdjSet = v.in_edges.union(&v.out_edges).copied().collect();
        self.edges_at(handles).collect()
    }

    /// Sources of in-edges, then destinations of out-edges, without duplicates.
    pub fn neighbors(&self, id: &str) -> Vec<&Node> {
        let Some(v) = self.vertex_by_id(id) else {
            return Vec::new();
        };
        let mut seen: AdjSet = AdjSet::default();
        for &e in &v.in_edges {
            if let Some(e) = self.edge_entry(e) {
                seen.insert(e.source);
            }
        }
        for &e in &v.out_edges {
            if let Some(e) = self.edge_entry(e) {
                seen.insert(e.dest);
            }
        }
        seen.iter().filter_map(|&ix| self.node_at(ix)).collect()
    }

    /// In-degree plus out-degree; 0 for an unknown vertex.
    pub fn degree(&self, id: &str) -> usize {
        self.vertex_by_id(id)
            .map(|v| v.in_edges.len() + v.out_edges.len())
            .unwrap_or(0)
    }

    /// Detaches the edge from both adjacency sets and drops it. Returns `false` if absent.
    pub fn remove_edge(&mut self, id: &str) -> bool {
        let Some(&ix) = self.edge_index.get(id) else {
            return false;
        };
        self.remove_edge_at(ix)
    }

    fn remove_edge_at(&mut self, ix: usize) -> bool {
        let Some(entry) = self.edges.get_mut(ix).and_then(Option::take) else {
            return false;
        };
        tracing::debug!(
            source = %self.node_at(entry.source).map_or("", |n| n.id.as_str()),
            edge_type = %entry.edge.edge_type,
            dest = %self.node_at(entry.dest).map_or("", |n| n.id.as_str()),
            "remove edge"
        );
        self.edge_index.remove(entry.edge.id.as_str());
        if let Some(v) = self.vertex_entry_mut(entry.source) {
            v.out_edges.shift_remove(&ix);
        }
        if let Some(v) = self.vertex_entry_mut(entry.dest) {
            v.in_edges.shift_remove(&ix);
        }
        self.free_edges.push(ix);
        true
    }

    /// Removes every in- and out-edge of the vertex, then the vertex itself. Returns `false`
    /// if absent.
    pub fn remove_vertex(&mut self, id: &str) -> bool {
        let Some(&ix) = self.vertex_index.get(id) else {
            return false;
        };
        tracing::debug!(vertex = %id, "remove vertex");

        // Detach the vertex's own sets first so each edge removal only touches the far side.
        let (in_edges, out_edges): (AdjSet, AdjSet) = match self.vertex_entry_mut(ix) {
            Some(v) => (
                std::mem::take(&mut v.in_edges),
                std::mem::take(&mut v.out_edges),
            ),
            None => Default::default(),
        };
        for e in in_edges.into_iter().chain(out_edges) {
            // A self-loop shows up in both sets; the second attempt is a no-op.
            self.remove_edge_at(e);
        }

        if let Some(v) = self.vertices.get_mut(ix).and_then(Option::take) {
            debug_assert!(v.in_edges.is_empty() && v.out_edges.is_empty());
        }
        self.vertex_index.remove(id);
        self.free_vertices.push(ix);
        true
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Node> {
        self.vertices.iter().flatten().map(|v| &v.node)
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter().flatten().map(|e| &e.edge)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_index.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_index.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

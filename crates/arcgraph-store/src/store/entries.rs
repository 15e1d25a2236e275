//! Arena slot payloads for [`GraphStore`](super::GraphStore).

use crate::model::{Edge, Node};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

/// Arena handles, insertion ordered.
pub(in crate::store) type AdjSet = IndexSet<usize, FxBuildHasher>;

#[derive(Debug, Clone)]
pub(in crate::store) struct VertexEntry {
    pub(in crate::store) node: Node,
    pub(in crate::store) in_edges: AdjSet,
    pub(in crate::store) out_edges: AdjSet,
}

impl VertexEntry {
    pub(in crate::store) fn new(node: Node) -> Self {
        Self {
            node,
            in_edges: AdjSet::default(),
            out_edges: AdjSet::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub(in crate::store) struct EdgeEntry {
    pub(in crate::store) edge: Edge,
    pub(in crate::store) source: usize,
    pub(in crate::store) dest: usize,
}

/// Stores `value` in the first free slot, or appends one. Returns the slot handle.
pub(in crate::store) fn alloc_slot<T>(
    slots: &mut Vec<Option<T>>,
    free: &mut Vec<usize>,
    value: T,
) -> usize {
    if let Some(ix) = free.pop() {
        debug_assert!(slots[ix].is_none(), "free list points at an occupied slot");
        slots[ix] = Some(value);
        return ix;
    }
    slots.push(Some(value));
    slots.len() - 1
}

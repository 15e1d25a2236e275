//! Turns store edges into renderable arc descriptions.

use crate::config::Config;
use crate::{Error, Result};
use arcgraph_geom::{ArcGeometry, GeometryConfig, NodeGeometry, Size, compute_arc};
use arcgraph_store::{Edge, GraphStore, Node};

/// Everything a rendering surface needs to draw one edge.
#[derive(Debug, Clone, PartialEq)]
pub struct ArcView {
    pub edge_id: String,
    pub source_id: String,
    pub dest_id: String,
    pub label: String,
    /// Hover text. Group edges have none because their id is synthetic.
    pub title: Option<String>,
    pub geometry: ArcGeometry,
}

/// Snapshot of a node's current position and size.
pub fn snapshot(node: &Node) -> Result<NodeGeometry> {
    Ok(NodeGeometry::new(node.x, node.y, node.width, node.height)?)
}

#[derive(Debug, Clone, Default)]
pub struct ArcPresenter {
    geometry: GeometryConfig,
}

impl ArcPresenter {
    pub fn new(config: &Config) -> Self {
        Self::with_geometry(config.geometry.clone())
    }

    pub fn with_geometry(geometry: GeometryConfig) -> Self {
        Self { geometry }
    }

    pub fn geometry(&self) -> &GeometryConfig {
        &self.geometry
    }

    /// Recomputes one edge from the current state of its endpoints.
    pub fn present(&self, store: &GraphStore, edge_id: &str, label_size: Size) -> Result<ArcView> {
        let unknown = || Error::UnknownEdge {
            edge_id: edge_id.to_string(),
        };
        let edge = store.edge(edge_id).ok_or_else(unknown)?;
        let (source, dest) = store.endpoints(edge_id).ok_or_else(unknown)?;
        self.view(edge, source, dest, label_size)
    }

    /// Recomputes every edge in the store. `label_size` reports the rendered label box of an
    /// edge.
    pub fn present_all<F>(&self, store: &GraphStore, mut label_size: F) -> Result<Vec<ArcView>>
    where
        F: FnMut(&Edge) -> Size,
    {
        let views = store
            .edges()
            .map(|edge| self.present(store, &edge.id, label_size(edge)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(count = views.len(), "recomputed all arcs");
        Ok(views)
    }

    /// Recomputes only the edges touching `vertex_id`, e.g. after that node was dragged.
    /// Unknown vertices yield an empty list.
    pub fn present_incident<F>(
        &self,
        store: &GraphStore,
        vertex_id: &str,
        mut label_size: F,
    ) -> Result<Vec<ArcView>>
    where
        F: FnMut(&Edge) -> Size,
    {
        let views = store
            .incident_edges(vertex_id)
            .into_iter()
            .map(|edge| self.present(store, &edge.id, label_size(edge)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(vertex = vertex_id, count = views.len(), "recomputed incident arcs");
        Ok(views)
    }

    fn view(&self, edge: &Edge, source: &Node, dest: &Node, label_size: Size) -> Result<ArcView> {
        let geometry = compute_arc(
            &snapshot(source)?,
            &snapshot(dest)?,
            label_size,
            &self.geometry,
        );
        Ok(ArcView {
            edge_id: edge.id.clone(),
            source_id: source.id.clone(),
            dest_id: dest.id.clone(),
            label: edge.label.clone(),
            title: (!edge.group).then(|| edge.id.clone()),
            geometry,
        })
    }
}

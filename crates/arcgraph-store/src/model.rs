//! Vertex and edge payloads held by [`GraphStore`](crate::GraphStore).

/// A positioned node. `x`/`y` address the center of its bounding box.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Node {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width.max(0.0);
        self.height = height.max(0.0);
        self
    }
}

/// A directed relationship. Endpoints are recorded by the store, not by the edge itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub id: String,
    /// Relationship type, e.g. `"KNOWS"`.
    pub edge_type: String,
    /// Text rendered next to the arc.
    pub label: String,
    /// Collapsed/aggregate edge standing in for several real ones.
    pub group: bool,
}

impl Edge {
    pub fn new(id: impl Into<String>, edge_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            edge_type: edge_type.into(),
            label: String::new(),
            group: false,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn grouped(mut self) -> Self {
        self.group = true;
        self
    }
}

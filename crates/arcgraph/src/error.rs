pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] arcgraph_store::Error),

    #[error(transparent)]
    Geometry(#[from] arcgraph_geom::Error),

    #[error("Unknown edge: {edge_id}")]
    UnknownEdge { edge_id: String },

    #[error("Invalid config JSON: {0}")]
    Config(#[from] serde_json::Error),
}

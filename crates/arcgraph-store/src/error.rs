#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("edge {edge_id} references vertex {vertex_id}, which is not in the graph")]
    InvalidReference { edge_id: String, vertex_id: String },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the graphport-graph crate.

use thiserror::Error;

/// Errors related to Edge construction.
#[derive(Debug, Error)]
pub enum EdgeError {
    #[error("Relationship type cannot be empty")]
    EmptyRelationship,
}

/// Errors related to Graph operations.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node already exists: {0}")]
    DuplicateNode(String),

    #[error("Node not found: {0}")]
    NodeNotFound(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Edge error: {0}")]
    EdgeError(#[from] EdgeError),
}

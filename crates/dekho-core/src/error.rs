// crates/dekho-core/src/error.rs
use thiserror::Error;

/// Errors raised while constructing or loading a [`Catalog`](crate::Catalog).
///
/// Queries never fail: a missing id is reported as `None` or an empty list.
/// Everything here happens once, at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two nodes in the tree share the same identifier.
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    /// A node is malformed (empty id, destination without a city, ...).
    #[error("Invalid catalog data: {0}")]
    InvalidData(String),

    /// A dataset file or a requested node could not be found.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;

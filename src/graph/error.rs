//! Errors for the shared graph contracts.

use thiserror::Error;

/// Result type for graph contract lookups.
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors raised outside the iterator contract itself.
#[derive(Debug, Error)]
pub enum GraphError {
    /// No iterator kind was registered under this name.
    #[error("unknown iterator type: {0}")]
    UnknownType(String),
}

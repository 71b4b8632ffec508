//! Search error types.

use thiserror::Error;

/// Errors from proximity search and catalog operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Query parameters failed validation; nothing was sent.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// The HTTP request failed or returned a non-success status.
    #[error("search request failed: {0}")]
    Network(String),

    /// The response body could not be decoded.
    #[error("search response decode failed: {0}")]
    Decode(String),
}

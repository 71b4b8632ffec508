//! Position acquisition error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while acquiring the current position.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PositionError {
    /// The user or platform denied location permission.
    #[error("location permission denied")]
    PermissionDenied,

    /// The platform location service could not produce a fix.
    #[error("position unavailable: {0}")]
    Unavailable(String),

    /// No fix arrived within the requested timeout.
    #[error("position acquisition timed out after {0:?}")]
    Timeout(Duration),
}

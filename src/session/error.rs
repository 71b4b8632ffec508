//! Session error types.

use thiserror::Error;

use crate::position::PositionError;
use crate::search::SearchError;

use super::state::SessionState;

/// Errors from exploration session operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    /// Another session operation is already in flight.
    #[error("session is busy with another operation")]
    Busy,

    /// The session is not in a state that allows this operation.
    #[error("session is not ready for arrival verification ({0})")]
    NotReady(SessionState),

    /// Position acquisition failed.
    #[error("position acquisition failed: {0}")]
    Position(#[from] PositionError),

    /// The search query was rejected before reaching the backend.
    #[error("nearby search failed: {0}")]
    Search(#[from] SearchError),
}

//! Error types for the roster render pass
//!
//! Every variant is a "load-or-decode failure" from the page's point of view:
//! the pass is abandoned, logged once, and the container stays empty.

use thiserror::Error;

/// Failures that abort a render pass
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// The request never produced a response (network error, blocked, aborted)
    #[error("fetch failed: {0}")]
    Fetch(String),
    /// The server answered with a non-success status
    #[error("unexpected response status {0}")]
    Status(u16),
    /// The body is not a JSON array of student records
    #[error("malformed roster document: {0}")]
    Decode(String),
    /// The page has no element with the configured container id
    #[error("container element `{0}` not found")]
    MissingContainer(String),
    /// The host refused to attach a card
    #[error("failed to attach card: {0}")]
    Attach(String),
}

impl From<serde_json::Error> for RosterError {
    fn from(err: serde_json::Error) -> Self {
        RosterError::Decode(err.to_string())
    }
}

/// Result type alias for roster operations
pub type RosterResult<T> = Result<T, RosterError>;

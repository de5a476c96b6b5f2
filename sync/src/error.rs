use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyncError {
    /// Connection, DNS, TLS or timeout failure
    #[error("request to {url} failed: {reason}")]
    Transport { url: String, reason: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("roster file: {0}")]
    Roster(#[from] roster_core::RosterError),
    #[error("upstream student list is neither an array nor an object keyed by id")]
    UnexpectedShape,
}

impl SyncError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Worth another attempt against the same URL
    pub fn is_retryable(&self) -> bool {
        match self {
            SyncError::Transport { .. } => true,
            SyncError::Status { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

pub type SyncResult<T> = Result<T, SyncError>;

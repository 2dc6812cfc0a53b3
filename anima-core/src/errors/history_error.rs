//! Version-control backend errors.

use std::path::PathBuf;

/// Errors from the revision backend.
///
/// A missing repository is fatal at startup. Everything else degrades:
/// a listing failure means "no history for this file" and a fetch
/// failure skips that single revision.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("no repository found at {path}: {message}")]
    RepositoryNotFound { path: PathBuf, message: String },

    #[error("repository at {path} has no working directory")]
    BareRepository { path: PathBuf },

    #[error("invalid revision id {revision}")]
    InvalidRevision { revision: String },

    #[error("backend error: {0}")]
    Backend(String),
}

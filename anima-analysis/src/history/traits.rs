//! The narrow backend contract the drift aggregator depends on.

use std::path::Path;

use anima_core::errors::HistoryError;

use super::types::RevisionInfo;

/// Read-only revision queries against one repository.
///
/// Implementations may bind a library or invoke an external process;
/// either way both operations are bounded and side-effect free. Failed
/// fetches are skipped by the walker, never retried — historical data
/// is static.
pub trait RevisionSource {
    /// List revisions touching `path`, most-recent-first, at most `max`.
    fn list_revisions(&self, path: &Path, max: usize) -> Result<Vec<RevisionInfo>, HistoryError>;

    /// Full text content of `path` at `revision_id`.
    fn fetch_content(&self, revision_id: &str, path: &Path) -> Result<String, HistoryError>;
}

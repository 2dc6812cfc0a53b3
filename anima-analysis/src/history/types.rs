//! Revision metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One historical revision of a file, as listed by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionInfo {
    /// Backend revision id (for git, the full commit hash).
    pub id: String,
    /// Commit timestamp.
    pub timestamp: DateTime<Utc>,
    /// Author name.
    pub author: String,
    /// One-line commit message.
    pub summary: String,
}

/// A revision with its file content resolved.
#[derive(Debug, Clone)]
pub struct RevisionRecord {
    pub info: RevisionInfo,
    pub source_text: String,
}

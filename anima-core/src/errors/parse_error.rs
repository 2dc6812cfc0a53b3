//! Parser errors.

use std::path::PathBuf;

/// Errors that can occur while parsing a source unit.
///
/// Only the current working copy treats these as fatal; historical
/// revisions catch them per-revision and skip.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("failed to load grammar: {message}")]
    Grammar { message: String },

    #[error("tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("{error_count} syntax error(s) in {path}")]
    Syntax { path: PathBuf, error_count: u32 },

    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

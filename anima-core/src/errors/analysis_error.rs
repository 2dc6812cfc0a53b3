//! Top-level pipeline error.

use super::config_error::ConfigError;
use super::history_error::HistoryError;
use super::parse_error::ParseError;

/// Fatal errors surfaced by a single analysis call.
///
/// Per-file failures are isolated by the evolution aggregator; only
/// startup-level problems (missing repository, bad config) abort a run.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Convenience alias for pipeline results.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

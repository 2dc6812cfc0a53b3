//! Error handling for Anima.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod history_error;
pub mod parse_error;

pub use analysis_error::{AnalysisError, AnalysisResult};
pub use config_error::ConfigError;
pub use history_error::HistoryError;
pub use parse_error::ParseError;

//! anima-core: shared foundation for the Anima drift pipeline.
//!
//! - Types: immutable semantic coordinates, scalar metrics, phases
//! - Constants: the equilibrium point and health thresholds
//! - Errors: one enum per subsystem, `thiserror` only
//! - Config: evolution and vocabulary settings, TOML-loadable
//! - Tracing: `ANIMA_LOG`-driven subscriber setup

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

pub use config::{AnimaConfig, EvolutionConfig, VocabularyConfig};
pub use errors::{AnalysisError, AnalysisResult, ConfigError, HistoryError, ParseError};
pub use types::{Phase, ScalarMetrics, SemanticCoordinate};

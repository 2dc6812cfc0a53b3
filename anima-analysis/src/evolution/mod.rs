//! Temporal drift — per-file replay and codebase-wide aggregation.

pub mod aggregator;
pub mod drift;
pub mod types;

pub use aggregator::EvolutionAnalyzer;
pub use drift::DriftAnalyzer;
pub use types::{DriftAnalysis, EvolutionReport, PhaseTransition, RevisionSnapshot};

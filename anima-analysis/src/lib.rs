//! anima-analysis: the source-feature extraction and temporal-drift
//! pipeline.
//!
//! Data flows strictly upward: raw text → structural counts →
//! coordinate → scalar metrics → snapshot → time series → aggregate
//! verdict. Nothing below the revision walker knows about history;
//! nothing above the extractor parses source.

pub mod analyzer;
pub mod extractor;
pub mod evolution;
pub mod history;
pub mod parsers;
pub mod scanner;
pub mod vocabulary;

pub use analyzer::{FileAnalysis, FunctionAnalysis, SourceAnalyzer};
pub use evolution::{
    DriftAnalysis, DriftAnalyzer, EvolutionAnalyzer, EvolutionReport, PhaseTransition,
    RevisionSnapshot,
};
pub use history::{GitRevisionSource, RevisionSource, RevisionWalker};
pub use vocabulary::Vocabulary;

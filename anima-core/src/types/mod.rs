//! Value types shared across the Anima pipeline.
//! Immutable coordinates, pure scalar metrics, and phase classification.

pub mod coordinate;
pub mod metrics;
pub mod phase;

pub use coordinate::SemanticCoordinate;
pub use metrics::ScalarMetrics;
pub use phase::Phase;

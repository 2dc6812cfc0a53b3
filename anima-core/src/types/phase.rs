//! Three-state phase classification of a coordinate.

use serde::{Deserialize, Serialize};

use crate::constants::{
    ENTROPIC_HARMONY_CEILING, HOMEOSTATIC_HARMONY_CEILING, HOMEOSTATIC_LOVE_CEILING,
};

/// The phase a coordinate occupies, ordered from worst to best.
///
/// Ordering matters: a transition to a lower phase is a regression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Harmony below 0.5 — the coordinate is collapsing.
    Entropic,
    /// Harmony in [0.5, 0.6) or love below 0.7 — holding steady.
    Homeostatic,
    /// High harmony and love — self-sustaining.
    Autopoietic,
}

impl Phase {
    /// Classify a (harmony, love) pair. Total over all inputs.
    pub fn classify(harmony: f64, love: f64) -> Phase {
        if harmony < ENTROPIC_HARMONY_CEILING {
            Phase::Entropic
        } else if harmony < HOMEOSTATIC_HARMONY_CEILING || love < HOMEOSTATIC_LOVE_CEILING {
            Phase::Homeostatic
        } else {
            Phase::Autopoietic
        }
    }

    /// Numeric rank used for regression detection.
    pub fn order(&self) -> u8 {
        match self {
            Phase::Entropic => 0,
            Phase::Homeostatic => 1,
            Phase::Autopoietic => 2,
        }
    }

    /// Returns the display name of the phase.
    pub fn name(&self) -> &'static str {
        match self {
            Phase::Entropic => "entropic",
            Phase::Homeostatic => "homeostatic",
            Phase::Autopoietic => "autopoietic",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_boundaries() {
        assert_eq!(Phase::classify(0.49, 1.0), Phase::Entropic);
        assert_eq!(Phase::classify(0.5, 1.0), Phase::Homeostatic);
        assert_eq!(Phase::classify(0.59, 1.0), Phase::Homeostatic);
        assert_eq!(Phase::classify(0.6, 0.69), Phase::Homeostatic);
        assert_eq!(Phase::classify(0.6, 0.7), Phase::Autopoietic);
        assert_eq!(Phase::classify(1.0, 1.0), Phase::Autopoietic);
    }

    #[test]
    fn test_order_matches_derived_ord() {
        assert!(Phase::Entropic < Phase::Homeostatic);
        assert!(Phase::Homeostatic < Phase::Autopoietic);
        assert!(Phase::Entropic.order() < Phase::Homeostatic.order());
        assert!(Phase::Homeostatic.order() < Phase::Autopoietic.order());
    }
}

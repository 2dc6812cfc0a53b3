//! Scalar metrics derived from a semantic coordinate.

use serde::{Deserialize, Serialize};

use super::coordinate::SemanticCoordinate;
use super::phase::Phase;

/// Distance, harmony, consciousness, and phase for one coordinate.
///
/// All four values are pure functions of the coordinate and the
/// process-wide equilibrium point. Computed once, passed onward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalarMetrics {
    /// Euclidean distance to the equilibrium point.
    pub distance: f64,
    /// Inverse-distance closeness to equilibrium, in (0, 1].
    pub harmony: f64,
    /// P·W·L·J·H² — zero whenever any dimension is zero.
    pub consciousness: f64,
    /// Three-way classification of (harmony, love).
    pub phase: Phase,
}

impl ScalarMetrics {
    /// Compute the full metric set for one coordinate.
    pub fn from_coordinate(coordinate: &SemanticCoordinate) -> Self {
        let distance = coordinate.distance_to(&SemanticCoordinate::equilibrium());
        let harmony = 1.0 / (1.0 + distance);
        let consciousness = coordinate.power
            * coordinate.wisdom
            * coordinate.love
            * coordinate.justice
            * harmony
            * harmony;
        Self {
            distance,
            harmony,
            consciousness,
            phase: Phase::classify(harmony, coordinate.love),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equilibrium_is_perfect_harmony() {
        let m = ScalarMetrics::from_coordinate(&SemanticCoordinate::equilibrium());
        assert!(m.distance < 1e-12);
        assert!((m.harmony - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_dimension_kills_consciousness() {
        let c = SemanticCoordinate::with_emergent(0.0, 0.8, 0.9, 0.7);
        let m = ScalarMetrics::from_coordinate(&c);
        assert_eq!(m.consciousness, 0.0);
    }

    #[test]
    fn test_harmony_bounded() {
        let far = SemanticCoordinate::with_emergent(0.0, 0.0, 0.0, 0.0);
        let m = ScalarMetrics::from_coordinate(&far);
        assert!(m.harmony > 0.0 && m.harmony <= 1.0);
    }
}

//! Tests for coordinate derivation, scalar metrics, and phase classification.

use anima_core::constants::{
    JUSTICE_EQUILIBRIUM, LOVE_EQUILIBRIUM, POWER_EQUILIBRIUM, WISDOM_EQUILIBRIUM,
};
use anima_core::types::{Phase, ScalarMetrics, SemanticCoordinate};

#[test]
fn test_equilibrium_constants_match_closed_forms() {
    assert!((LOVE_EQUILIBRIUM - (5f64.sqrt() - 1.0) / 2.0).abs() < 1e-12);
    assert!((JUSTICE_EQUILIBRIUM - (2f64.sqrt() - 1.0)).abs() < 1e-12);
    assert!((POWER_EQUILIBRIUM - (std::f64::consts::E - 2.0)).abs() < 1e-12);
    assert!((WISDOM_EQUILIBRIUM - 2f64.ln()).abs() < 1e-12);
}

#[test]
fn test_metrics_at_equilibrium() {
    let m = ScalarMetrics::from_coordinate(&SemanticCoordinate::equilibrium());
    assert!(m.distance.abs() < 1e-9);
    assert!((m.harmony - 1.0).abs() < 1e-9);
    // At equilibrium harmony is 1 and love ≈ 0.618 < 0.7.
    assert_eq!(m.phase, Phase::Homeostatic);
}

#[test]
fn test_consciousness_zero_when_any_dimension_zero() {
    let cases = [
        SemanticCoordinate::with_emergent(0.0, 0.5, 0.5, 0.5),
        SemanticCoordinate::with_emergent(0.5, 0.0, 0.5, 0.5),
        SemanticCoordinate::with_emergent(0.5, 0.5, 0.0, 0.5),
        SemanticCoordinate::with_emergent(0.5, 0.5, 0.5, 0.0),
    ];
    for c in cases {
        let m = ScalarMetrics::from_coordinate(&c);
        assert_eq!(m.consciousness, 0.0, "coordinate {c:?}");
    }
}

#[test]
fn test_derivation_is_deterministic() {
    let a = SemanticCoordinate::derive(0.37, 0.81);
    let b = SemanticCoordinate::derive(0.37, 0.81);
    assert_eq!(a, b);
    let ma = ScalarMetrics::from_coordinate(&a);
    let mb = ScalarMetrics::from_coordinate(&b);
    assert_eq!(ma, mb);
}

#[test]
fn test_drift_to_sums_absolute_deltas() {
    let a = SemanticCoordinate::with_emergent(0.1, 0.2, 0.3, 0.4);
    let b = SemanticCoordinate::with_emergent(0.2, 0.1, 0.5, 0.4);
    assert!((a.drift_to(&b) - 0.4).abs() < 1e-12);
    assert!((a.drift_to(&b) - b.drift_to(&a)).abs() < 1e-12);
}

#[test]
fn test_serde_round_trip() {
    let c = SemanticCoordinate::derive(0.6, 0.4);
    let m = ScalarMetrics::from_coordinate(&c);
    let json = serde_json::to_string(&m).unwrap();
    let back: ScalarMetrics = serde_json::from_str(&json).unwrap();
    assert_eq!(m, back);
}

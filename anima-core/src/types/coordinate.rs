//! The four-dimensional semantic coordinate.

use serde::{Deserialize, Serialize};

use crate::constants::{
    JUSTICE_EQUILIBRIUM, LOVE_EQUILIBRIUM, POWER_EQUILIBRIUM, WISDOM_EQUILIBRIUM,
};

/// An immutable (Love, Justice, Power, Wisdom) tuple.
///
/// Power and Wisdom are fundamental: measured directly from structural
/// signals. Love and Justice are emergent: pure functions of Wisdom and
/// Power, never set independently outside of test/comparison paths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SemanticCoordinate {
    pub love: f64,
    pub justice: f64,
    pub power: f64,
    pub wisdom: f64,
}

impl SemanticCoordinate {
    /// Derive a full coordinate from the two measured scores.
    ///
    /// L = clamp(0.9·W + 0.1, 0, √2) and J = clamp(0.85·P + 0.05, 0, 1),
    /// with P and W themselves clamped to [0, 1].
    pub fn derive(power: f64, wisdom: f64) -> Self {
        let power = power.clamp(0.0, 1.0);
        let wisdom = wisdom.clamp(0.0, 1.0);
        Self {
            love: (0.9 * wisdom + 0.1).clamp(0.0, std::f64::consts::SQRT_2),
            justice: (0.85 * power + 0.05).clamp(0.0, 1.0),
            power,
            wisdom,
        }
    }

    /// Build a coordinate with explicit emergent dimensions.
    ///
    /// Skips derivation entirely. Intended for comparison and test use;
    /// the pipeline itself always goes through [`SemanticCoordinate::derive`].
    pub fn with_emergent(love: f64, justice: f64, power: f64, wisdom: f64) -> Self {
        Self {
            love: love.clamp(0.0, std::f64::consts::SQRT_2),
            justice: justice.clamp(0.0, 1.0),
            power: power.clamp(0.0, 1.0),
            wisdom: wisdom.clamp(0.0, 1.0),
        }
    }

    /// The fixed equilibrium point every coordinate is measured against.
    pub fn equilibrium() -> Self {
        Self {
            love: LOVE_EQUILIBRIUM,
            justice: JUSTICE_EQUILIBRIUM,
            power: POWER_EQUILIBRIUM,
            wisdom: WISDOM_EQUILIBRIUM,
        }
    }

    /// Euclidean distance to another coordinate.
    pub fn distance_to(&self, other: &SemanticCoordinate) -> f64 {
        let dl = self.love - other.love;
        let dj = self.justice - other.justice;
        let dp = self.power - other.power;
        let dw = self.wisdom - other.wisdom;
        (dl * dl + dj * dj + dp * dp + dw * dw).sqrt()
    }

    /// Sum of per-dimension absolute differences to another coordinate.
    pub fn drift_to(&self, other: &SemanticCoordinate) -> f64 {
        (self.love - other.love).abs()
            + (self.justice - other.justice).abs()
            + (self.power - other.power).abs()
            + (self.wisdom - other.wisdom).abs()
    }

    /// Component-wise arithmetic mean of a set of coordinates.
    ///
    /// Every coordinate carries equal weight regardless of the size of
    /// the function it came from. Returns `None` for an empty set — a
    /// unit with zero functions has no coordinate.
    pub fn mean(coordinates: &[SemanticCoordinate]) -> Option<Self> {
        if coordinates.is_empty() {
            return None;
        }
        let n = coordinates.len() as f64;
        let mut love = 0.0;
        let mut justice = 0.0;
        let mut power = 0.0;
        let mut wisdom = 0.0;
        for c in coordinates {
            love += c.love;
            justice += c.justice;
            power += c.power;
            wisdom += c.wisdom;
        }
        Some(Self {
            love: love / n,
            justice: justice / n,
            power: power / n,
            wisdom: wisdom / n,
        })
    }
}

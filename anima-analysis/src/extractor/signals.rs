//! Structural signal counts for one function.

use serde::{Deserialize, Serialize};

/// Counts accumulated over one function body.
///
/// Transient: created fresh per function, consumed immediately to
/// produce the two measured scores.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralSignals {
    /// Plain assignment statements.
    pub assignments: u32,
    /// Augmented (`x += 1`) assignments.
    pub augmented_assignments: u32,
    /// Call expressions.
    pub calls: u32,
    /// Raise statements.
    pub raises: u32,
    /// Delete statements.
    pub deletes: u32,
    /// For/while loops.
    pub loops: u32,
    /// If statements and elif arms.
    pub conditionals: u32,
    /// Return statements.
    pub returns: u32,
    /// Try/except blocks.
    pub tries: u32,
    /// Assert statements.
    pub asserts: u32,
    /// Leading documentation string present.
    pub has_doc: bool,
    /// Type annotations on parameters and return value.
    pub type_hints: u32,
    /// Name/call tokens matching the power vocabulary.
    pub power_verb_hits: u32,
    /// Name/call tokens matching the wisdom vocabulary.
    pub wisdom_verb_hits: u32,
}

impl StructuralSignals {
    /// Measured Power score, clamped to [0, 1].
    ///
    /// Both plain and augmented assignments count as assignments here.
    pub fn power_score(&self) -> f64 {
        let assigns = (self.assignments + self.augmented_assignments) as f64;
        let raw = 0.3
            + 0.15 * assigns
            + 0.08 * self.calls as f64
            + 0.20 * self.raises as f64
            + 0.20 * self.deletes as f64
            + 0.10 * self.loops as f64
            + 0.10 * self.power_verb_hits as f64;
        raw.clamp(0.0, 1.0)
    }

    /// Measured Wisdom score, clamped to [0, 1].
    pub fn wisdom_score(&self) -> f64 {
        let doc = if self.has_doc { 1.0 } else { 0.0 };
        let raw = 0.2
            + 0.20 * doc
            + 0.05 * self.type_hints as f64
            + 0.10 * self.returns as f64
            + 0.05 * self.conditionals as f64
            + 0.10 * self.wisdom_verb_hits as f64;
        raw.clamp(0.0, 1.0)
    }
}

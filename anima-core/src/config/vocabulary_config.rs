//! Vocabulary configuration — the two verb tables.

use serde::{Deserialize, Serialize};

/// Verb tables mapping identifier tokens to a fundamental dimension.
///
/// An empty list always means "use the built-in table" — a vocabulary
/// cannot be configured down to zero tokens. A token appearing in both
/// lists is resolved to power; each token maps to at most one dimension.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Tokens scored toward the Power dimension.
    pub power_verbs: Vec<String>,
    /// Tokens scored toward the Wisdom dimension.
    pub wisdom_verbs: Vec<String>,
}

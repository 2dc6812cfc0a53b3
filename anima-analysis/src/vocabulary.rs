//! Verb vocabulary — precompiled token lookup for the two fundamental
//! dimensions.
//!
//! Built once per run from config (or the built-in tables) into hash
//! sets; never re-derived per call.

use rustc_hash::FxHashSet;

use anima_core::config::VocabularyConfig;

/// Built-in power verbs: tokens signalling action and mutation.
const POWER_VERBS: &[&str] = &[
    "create", "build", "make", "run", "execute", "launch", "start", "spawn", "write", "send",
    "push", "apply", "force", "set", "update", "insert", "remove", "delete", "destroy", "kill",
    "terminate", "drop", "purge", "flush", "commit", "deploy", "trigger",
];

/// Built-in wisdom verbs: tokens signalling observation and judgment.
const WISDOM_VERBS: &[&str] = &[
    "check", "validate", "verify", "analyze", "inspect", "observe", "read", "get", "query",
    "find", "search", "learn", "understand", "evaluate", "assess", "measure", "compare",
    "classify", "detect", "parse", "resolve", "review", "audit", "predict",
];

/// Which fundamental dimension a token scores toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Power,
    Wisdom,
}

/// Precompiled token lookup. A token maps to at most one dimension;
/// power wins on collision.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    power: FxHashSet<String>,
    wisdom: FxHashSet<String>,
}

impl Vocabulary {
    /// The built-in verb tables.
    pub fn builtin() -> Self {
        Self::from_lists(
            POWER_VERBS.iter().map(|s| s.to_string()),
            WISDOM_VERBS.iter().map(|s| s.to_string()),
        )
    }

    /// Build from config, falling back to the built-in table for any
    /// list left empty.
    pub fn from_config(config: &VocabularyConfig) -> Self {
        let power: Vec<String> = if config.power_verbs.is_empty() {
            POWER_VERBS.iter().map(|s| s.to_string()).collect()
        } else {
            config.power_verbs.clone()
        };
        let wisdom: Vec<String> = if config.wisdom_verbs.is_empty() {
            WISDOM_VERBS.iter().map(|s| s.to_string()).collect()
        } else {
            config.wisdom_verbs.clone()
        };
        Self::from_lists(power.into_iter(), wisdom.into_iter())
    }

    fn from_lists(
        power: impl Iterator<Item = String>,
        wisdom: impl Iterator<Item = String>,
    ) -> Self {
        let power: FxHashSet<String> = power.map(|s| s.to_lowercase()).collect();
        let wisdom: FxHashSet<String> = wisdom
            .map(|s| s.to_lowercase())
            .filter(|s| !power.contains(s))
            .collect();
        Self { power, wisdom }
    }

    /// Classify a single lowercase token.
    pub fn classify(&self, token: &str) -> Option<Dimension> {
        if self.power.contains(token) {
            Some(Dimension::Power)
        } else if self.wisdom.contains(token) {
            Some(Dimension::Wisdom)
        } else {
            None
        }
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

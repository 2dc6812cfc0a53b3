//! Evolution run configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS, DEFAULT_MAX_FILES, DEFAULT_MAX_REVISIONS,
    DEFAULT_THREADS,
};

/// Configuration for a codebase-wide evolution run.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Source extensions to analyze. Default: py, pyi.
    pub extensions: Vec<String>,
    /// Directory names never descended into. Default: VCS/build dirs.
    pub excluded_dirs: Vec<String>,
    /// Maximum files per run. Default: 500.
    pub max_files: Option<usize>,
    /// Maximum revisions replayed per file. Default: 50.
    pub max_revisions: Option<usize>,
    /// Worker threads for per-file fan-out. Default: 0 (auto-detect).
    pub threads: Option<usize>,
}

impl EvolutionConfig {
    /// Returns the effective extension list, defaulting to Python.
    pub fn effective_extensions(&self) -> Vec<String> {
        if self.extensions.is_empty() {
            DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
        } else {
            self.extensions.clone()
        }
    }

    /// Returns the effective excluded directory names.
    pub fn effective_excluded_dirs(&self) -> Vec<String> {
        if self.excluded_dirs.is_empty() {
            DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
        } else {
            self.excluded_dirs.clone()
        }
    }

    /// Returns the effective file cap, defaulting to 500.
    pub fn effective_max_files(&self) -> usize {
        self.max_files.unwrap_or(DEFAULT_MAX_FILES)
    }

    /// Returns the effective per-file revision cap, defaulting to 50.
    pub fn effective_max_revisions(&self) -> usize {
        self.max_revisions.unwrap_or(DEFAULT_MAX_REVISIONS)
    }

    /// Returns the effective thread count (0 = auto-detect).
    pub fn effective_threads(&self) -> usize {
        self.threads.unwrap_or(DEFAULT_THREADS)
    }
}

//! Shared constants for the Anima drift pipeline.

/// Anima version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ---- Equilibrium Point ----
//
// The fixed point every coordinate is measured against. These are
// process-wide and immutable so that snapshots taken at different
// times remain comparable.

/// Love equilibrium: the inverse golden ratio, 1/φ.
pub const LOVE_EQUILIBRIUM: f64 = 0.618_033_988_749_894_9;

/// Justice equilibrium: √2 − 1.
pub const JUSTICE_EQUILIBRIUM: f64 = 0.414_213_562_373_095_1;

/// Power equilibrium: e − 2.
pub const POWER_EQUILIBRIUM: f64 = 0.718_281_828_459_045_2;

/// Wisdom equilibrium: ln 2.
pub const WISDOM_EQUILIBRIUM: f64 = 0.693_147_180_559_945_3;

// ---- Phase Boundaries ----

/// Below this harmony a coordinate is entropic.
pub const ENTROPIC_HARMONY_CEILING: f64 = 0.5;

/// Below this harmony a coordinate is at best homeostatic.
pub const HOMEOSTATIC_HARMONY_CEILING: f64 = 0.6;

/// Below this love a coordinate is at best homeostatic.
pub const HOMEOSTATIC_LOVE_CEILING: f64 = 0.7;

// ---- Health Thresholds ----

/// Consciousness trend below this marks a file as declining.
pub const DECLINE_THRESHOLD: f64 = -0.05;

/// Consciousness below this floor counts as dormant.
pub const CONSCIOUSNESS_FLOOR: f64 = 0.1;

/// Number of trailing snapshots inspected by the death-spiral query.
pub const DEATH_SPIRAL_WINDOW: usize = 5;

// ---- Defaults ----

/// Default maximum revisions replayed per file.
pub const DEFAULT_MAX_REVISIONS: usize = 50;

/// Default maximum files per evolution run.
pub const DEFAULT_MAX_FILES: usize = 500;

/// Default number of worker threads (0 = auto-detect).
pub const DEFAULT_THREADS: usize = 0;

/// Default source extensions analyzed.
pub const DEFAULT_EXTENSIONS: [&str; 2] = ["py", "pyi"];

/// Directories never descended into during discovery.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 8] = [
    ".git",
    "__pycache__",
    "node_modules",
    "target",
    "venv",
    ".venv",
    "build",
    "dist",
];

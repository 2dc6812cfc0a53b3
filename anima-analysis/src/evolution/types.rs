//! Drift and evolution value types — the pipeline's public surface.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use anima_core::constants::{CONSCIOUSNESS_FLOOR, DEATH_SPIRAL_WINDOW, DECLINE_THRESHOLD};
use anima_core::types::{Phase, SemanticCoordinate};

/// One successfully measured historical revision of one file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevisionSnapshot {
    pub revision_id: String,
    pub timestamp: DateTime<Utc>,
    pub author: String,
    pub message: String,
    pub coordinate: SemanticCoordinate,
    pub harmony: f64,
    pub consciousness: f64,
    pub phase: Phase,
}

/// A phase change between consecutive snapshots, recorded at the
/// revision where the new phase was first observed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseTransition {
    pub revision_id: String,
    pub from: Phase,
    pub to: Phase,
}

impl PhaseTransition {
    /// True when the file moved to a lower-ordered phase.
    pub fn is_regression(&self) -> bool {
        self.to.order() < self.from.order()
    }
}

/// Trend, transition, and health statistics for one file's history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftAnalysis {
    pub path: String,
    /// Snapshots in chronological order, oldest first.
    pub snapshots: Vec<RevisionSnapshot>,
    /// Sum of per-dimension absolute deltas, first vs. last snapshot.
    pub total_drift: f64,
    /// last.consciousness − first.consciousness.
    pub consciousness_trend: f64,
    pub phase_transitions: Vec<PhaseTransition>,
    pub is_healthy: bool,
    pub health_issues: Vec<String>,
}

impl DriftAnalysis {
    /// Derive all statistics from an ordered snapshot list.
    ///
    /// Fewer than two snapshots yields zero-valued derived fields and
    /// no health verdict — that is a normal outcome, not an error.
    pub fn from_snapshots(path: String, snapshots: Vec<RevisionSnapshot>) -> Self {
        if snapshots.len() < 2 {
            return Self {
                path,
                snapshots,
                total_drift: 0.0,
                consciousness_trend: 0.0,
                phase_transitions: Vec::new(),
                is_healthy: true,
                health_issues: Vec::new(),
            };
        }

        let first = &snapshots[0];
        let last = &snapshots[snapshots.len() - 1];

        // Displacement, not a path integral: only the endpoints matter.
        let total_drift = first.coordinate.drift_to(&last.coordinate);
        let consciousness_trend = last.consciousness - first.consciousness;

        let phase_transitions: Vec<PhaseTransition> = snapshots
            .windows(2)
            .filter(|pair| pair[0].phase != pair[1].phase)
            .map(|pair| PhaseTransition {
                revision_id: pair[1].revision_id.clone(),
                from: pair[0].phase,
                to: pair[1].phase,
            })
            .collect();

        let mut is_healthy = true;
        let mut health_issues = Vec::new();

        if consciousness_trend < DECLINE_THRESHOLD {
            is_healthy = false;
            health_issues.push(format!(
                "declining consciousness (trend {consciousness_trend:+.3})"
            ));
        }

        let regressions = phase_transitions
            .iter()
            .filter(|t| t.is_regression())
            .count();
        if regressions > 0 {
            is_healthy = false;
            health_issues.push(format!("phase regression (x{regressions})"));
        }

        if last.phase == Phase::Entropic {
            is_healthy = false;
            health_issues.push("currently collapsing".to_string());
        }

        // Advisory only: permanently-dormant code is common for utility
        // files and does not by itself flip the verdict.
        if snapshots
            .iter()
            .all(|s| s.consciousness < CONSCIOUSNESS_FLOOR)
        {
            health_issues.push("never crossed consciousness threshold".to_string());
        }

        Self {
            path,
            snapshots,
            total_drift,
            consciousness_trend,
            phase_transitions,
            is_healthy,
            health_issues,
        }
    }

    /// Sustained-decline query: negative trend plus a trailing window of
    /// non-increasing consciousness.
    pub fn is_death_spiral(&self) -> bool {
        if self.consciousness_trend >= DECLINE_THRESHOLD {
            return false;
        }
        if self.snapshots.len() < DEATH_SPIRAL_WINDOW {
            return false;
        }
        let tail = &self.snapshots[self.snapshots.len() - DEATH_SPIRAL_WINDOW..];
        tail.windows(2)
            .all(|pair| pair[1].consciousness <= pair[0].consciousness)
    }
}

/// Codebase-wide roll-up of per-file drift analyses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionReport {
    pub files: BTreeMap<String, DriftAnalysis>,
    /// Mean per-file trend across files with at least one snapshot.
    pub avg_consciousness_trend: f64,
    pub total_phase_transitions: usize,
    pub healthy_files: usize,
    pub unhealthy_files: usize,
    /// Flattened, path-prefixed health issues.
    pub critical_events: Vec<String>,
}

impl EvolutionReport {
    /// Merge per-file analyses into codebase-wide statistics.
    ///
    /// Files with empty history are carried in the map but excluded
    /// from the trend average and the health tallies.
    pub fn from_analyses(analyses: Vec<DriftAnalysis>) -> Self {
        let mut trend_sum = 0.0;
        let mut trend_count = 0usize;
        let mut total_phase_transitions = 0;
        let mut healthy_files = 0;
        let mut unhealthy_files = 0;

        let files: BTreeMap<String, DriftAnalysis> = analyses
            .into_iter()
            .map(|a| (a.path.clone(), a))
            .collect();

        for analysis in files.values() {
            total_phase_transitions += analysis.phase_transitions.len();
            if analysis.snapshots.is_empty() {
                continue;
            }
            trend_sum += analysis.consciousness_trend;
            trend_count += 1;
            if analysis.is_healthy {
                healthy_files += 1;
            } else {
                unhealthy_files += 1;
            }
        }

        let critical_events: Vec<String> = files
            .values()
            .flat_map(|a| {
                a.health_issues
                    .iter()
                    .map(|issue| format!("{}: {}", a.path, issue))
            })
            .collect();

        Self {
            files,
            avg_consciousness_trend: if trend_count > 0 {
                trend_sum / trend_count as f64
            } else {
                0.0
            },
            total_phase_transitions,
            healthy_files,
            unhealthy_files,
            critical_events,
        }
    }
}

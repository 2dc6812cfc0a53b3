//! Per-file drift analysis: replay the measurement across history.

use std::path::Path;

use tracing::debug;

use anima_core::errors::ParseError;
use anima_core::types::{ScalarMetrics, SemanticCoordinate};

use crate::analyzer::SourceAnalyzer;
use crate::history::{RevisionRecord, RevisionSource, RevisionWalker};
use crate::vocabulary::Vocabulary;

use super::types::{DriftAnalysis, RevisionSnapshot};

/// Replays one file's revisions, oldest to newest, through the
/// extract → derive → metrics pipeline.
///
/// Revision processing is strictly sequential: trend and transition
/// computation depend on order. Malformed historical revisions are
/// caught per-revision and skipped — old commits routinely contain
/// mid-edit states.
pub struct DriftAnalyzer<'s, S: RevisionSource> {
    source: &'s S,
    analyzer: SourceAnalyzer,
    max_revisions: usize,
}

impl<'s, S: RevisionSource> DriftAnalyzer<'s, S> {
    pub fn new(
        source: &'s S,
        vocabulary: Vocabulary,
        max_revisions: usize,
    ) -> Result<Self, ParseError> {
        Ok(Self {
            source,
            analyzer: SourceAnalyzer::new(vocabulary)?,
            max_revisions,
        })
    }

    /// Analyze one file's full (capped) history.
    pub fn analyze_file(&mut self, path: &Path) -> DriftAnalysis {
        let walker = RevisionWalker::new(self.source, self.max_revisions);
        let records = walker.walk(path);

        let mut snapshots = Vec::with_capacity(records.len());
        for record in records {
            if let Some(snapshot) = self.measure_revision(&record, path) {
                snapshots.push(snapshot);
            }
        }

        DriftAnalysis::from_snapshots(path.display().to_string(), snapshots)
    }

    /// Measure one revision, or `None` when it cannot be measured
    /// (syntax errors, zero functions).
    fn measure_revision(
        &mut self,
        record: &RevisionRecord,
        path: &Path,
    ) -> Option<RevisionSnapshot> {
        let analysis = match self.analyzer.analyze_source(&record.source_text, path) {
            Ok(analysis) => analysis,
            Err(e) => {
                debug!(
                    path = %path.display(),
                    revision = %record.info.id,
                    error = %e,
                    "skipping unparseable revision"
                );
                return None;
            }
        };

        let coordinate: SemanticCoordinate = match analysis.coordinate {
            Some(coordinate) => coordinate,
            None => {
                debug!(
                    path = %path.display(),
                    revision = %record.info.id,
                    "revision has no functions; excluded"
                );
                return None;
            }
        };
        let metrics = ScalarMetrics::from_coordinate(&coordinate);

        Some(RevisionSnapshot {
            revision_id: record.info.id.clone(),
            timestamp: record.info.timestamp,
            author: record.info.author.clone(),
            message: record.info.summary.clone(),
            coordinate,
            harmony: metrics.harmony,
            consciousness: metrics.consciousness,
            phase: metrics.phase,
        })
    }
}

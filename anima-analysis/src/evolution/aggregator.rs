//! Codebase-wide evolution analysis.

use std::path::Path;

use rayon::prelude::*;
use tracing::{info, warn};

use anima_core::config::EvolutionConfig;
use anima_core::errors::{AnalysisError, AnalysisResult};

use crate::history::GitRevisionSource;
use crate::scanner::discover_files;
use crate::vocabulary::Vocabulary;

use super::drift::DriftAnalyzer;
use super::types::{DriftAnalysis, EvolutionReport};

/// Runs the drift pipeline across a whole codebase.
///
/// Per-file work is embarrassingly parallel and fans out over a rayon
/// pool; each file's analysis opens its own repository handle and
/// parser. One file's failure never stops the rest — it surfaces as an
/// analysis with zero snapshots.
pub struct EvolutionAnalyzer {
    config: EvolutionConfig,
    vocabulary: Vocabulary,
}

impl EvolutionAnalyzer {
    pub fn new(config: EvolutionConfig, vocabulary: Vocabulary) -> Self {
        Self { config, vocabulary }
    }

    /// Analyze every discovered file under `root` and merge the results.
    ///
    /// A missing repository at `root` is fatal; everything else
    /// degrades per file.
    pub fn analyze(&self, root: &Path) -> AnalysisResult<EvolutionReport> {
        // Validate the repository once, up front.
        GitRevisionSource::open(root)?;

        let (files, stats) = discover_files(root, &self.config);
        info!(
            considered = stats.considered,
            selected = stats.selected,
            capped = stats.capped,
            "starting evolution run"
        );

        let analyses = match self.build_pool() {
            Some(pool) => pool.install(|| self.analyze_all(root, &files)),
            None => self.analyze_all(root, &files),
        };

        Ok(EvolutionReport::from_analyses(analyses))
    }

    /// Analyze a single file's history. The per-file entry point of the
    /// public surface; startup-level failures propagate.
    pub fn analyze_file(&self, root: &Path, path: &Path) -> AnalysisResult<DriftAnalysis> {
        let source = GitRevisionSource::open(root)?;
        let mut analyzer = DriftAnalyzer::new(
            &source,
            self.vocabulary.clone(),
            self.config.effective_max_revisions(),
        )
        .map_err(AnalysisError::Parse)?;
        Ok(self.rekey(root, analyzer.analyze_file(path)))
    }

    fn analyze_all(&self, root: &Path, files: &[std::path::PathBuf]) -> Vec<DriftAnalysis> {
        files
            .par_iter()
            .map(|path| self.analyze_one(root, path))
            .collect()
    }

    fn analyze_one(&self, root: &Path, path: &Path) -> DriftAnalysis {
        let empty = || {
            self.rekey(
                root,
                DriftAnalysis::from_snapshots(path.display().to_string(), Vec::new()),
            )
        };

        let source = match GitRevisionSource::open(root) {
            Ok(source) => source,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "repository unavailable for file");
                return empty();
            }
        };
        let mut analyzer = match DriftAnalyzer::new(
            &source,
            self.vocabulary.clone(),
            self.config.effective_max_revisions(),
        ) {
            Ok(analyzer) => analyzer,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to construct analyzer");
                return empty();
            }
        };
        self.rekey(root, analyzer.analyze_file(path))
    }

    /// Report keys are root-relative paths.
    fn rekey(&self, root: &Path, mut analysis: DriftAnalysis) -> DriftAnalysis {
        let rekeyed = Path::new(&analysis.path)
            .strip_prefix(root)
            .map(|rel| rel.display().to_string());
        if let Ok(path) = rekeyed {
            analysis.path = path;
        }
        analysis
    }

    fn build_pool(&self) -> Option<rayon::ThreadPool> {
        let threads = self.config.effective_threads();
        if threads == 0 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new().num_threads(threads).build() {
            Ok(pool) => Some(pool),
            Err(e) => {
                warn!(error = %e, "failed to build worker pool; using default");
                None
            }
        }
    }
}

//! Current-state analysis: raw text → structural counts → coordinate →
//! scalar metrics for one source unit.

use std::path::Path;

use serde::{Deserialize, Serialize};

use anima_core::errors::ParseError;
use anima_core::types::{ScalarMetrics, SemanticCoordinate};

use crate::extractor::FeatureExtractor;
use crate::parsers::PythonParser;
use crate::vocabulary::Vocabulary;

/// Per-function measurement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionAnalysis {
    pub name: String,
    pub coordinate: SemanticCoordinate,
    pub metrics: ScalarMetrics,
}

/// Full measurement of one source unit.
///
/// A unit with zero functions has no coordinate and no metrics; it is
/// excluded from any aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileAnalysis {
    pub path: String,
    pub functions: Vec<FunctionAnalysis>,
    pub coordinate: Option<SemanticCoordinate>,
    pub metrics: Option<ScalarMetrics>,
}

/// Runs the extract → derive → metrics pipeline over source text.
///
/// Holds one parser instance; create one analyzer per worker thread.
pub struct SourceAnalyzer {
    parser: PythonParser,
    vocabulary: Vocabulary,
}

impl SourceAnalyzer {
    pub fn new(vocabulary: Vocabulary) -> Result<Self, ParseError> {
        Ok(Self {
            parser: PythonParser::new()?,
            vocabulary,
        })
    }

    /// Analyze source text. Parse failure is fatal for this call.
    pub fn analyze_source(&mut self, source: &str, path: &Path) -> Result<FileAnalysis, ParseError> {
        let module = self.parser.parse(source, path)?;
        let extractor = FeatureExtractor::new(&self.vocabulary);

        let functions: Vec<FunctionAnalysis> = extractor
            .extract(&module)
            .into_iter()
            .map(|f| {
                let coordinate = SemanticCoordinate::derive(
                    f.signals.power_score(),
                    f.signals.wisdom_score(),
                );
                FunctionAnalysis {
                    name: f.name,
                    metrics: ScalarMetrics::from_coordinate(&coordinate),
                    coordinate,
                }
            })
            .collect();

        let coordinates: Vec<SemanticCoordinate> =
            functions.iter().map(|f| f.coordinate).collect();
        let coordinate = SemanticCoordinate::mean(&coordinates);
        let metrics = coordinate.as_ref().map(ScalarMetrics::from_coordinate);

        Ok(FileAnalysis {
            path: path.display().to_string(),
            functions,
            coordinate,
            metrics,
        })
    }

    /// Read and analyze a file on disk.
    pub fn analyze_path(&mut self, path: &Path) -> Result<FileAnalysis, ParseError> {
        let source = std::fs::read_to_string(path).map_err(|source| ParseError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.analyze_source(&source, path)
    }
}

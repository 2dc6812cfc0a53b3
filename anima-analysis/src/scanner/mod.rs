//! File discovery — extension filter, excluded directories, file cap.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use anima_core::config::EvolutionConfig;

/// Discovery statistics for one run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanStats {
    /// Files seen by the walk.
    pub considered: usize,
    /// Files selected for analysis.
    pub selected: usize,
    /// True when the max-file cap truncated the selection.
    pub capped: bool,
}

/// Walk `root` and select analyzable files.
///
/// Respects .gitignore, never descends into excluded directories, and
/// truncates deterministically (sorted order) at the configured cap.
pub fn discover_files(root: &Path, config: &EvolutionConfig) -> (Vec<PathBuf>, ScanStats) {
    let excluded: FxHashSet<String> = config.effective_excluded_dirs().into_iter().collect();
    let extensions: FxHashSet<String> = config
        .effective_extensions()
        .into_iter()
        .map(|e| e.to_lowercase())
        .collect();

    let walker = WalkBuilder::new(root)
        .standard_filters(true)
        .filter_entry(move |entry| {
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            if !is_dir {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !excluded.contains(name.as_ref())
        })
        .build();

    let mut stats = ScanStats::default();
    let mut files: Vec<PathBuf> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                debug!(error = %e, "skipping unreadable entry");
                continue;
            }
        };
        if !entry.file_type().map(|t| t.is_file()).unwrap_or(false) {
            continue;
        }
        stats.considered += 1;
        let matches = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| extensions.contains(&e.to_lowercase()))
            .unwrap_or(false);
        if matches {
            files.push(entry.into_path());
        }
    }

    files.sort();
    let cap = config.effective_max_files();
    if files.len() > cap {
        files.truncate(cap);
        stats.capped = true;
    }
    stats.selected = files.len();
    (files, stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_extension_filter_and_exclusions() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.py"), "x = 1\n").unwrap();
        fs::write(dir.path().join("b.rs"), "fn main() {}\n").unwrap();
        fs::create_dir(dir.path().join("__pycache__")).unwrap();
        fs::write(dir.path().join("__pycache__/c.py"), "x = 1\n").unwrap();

        let (files, stats) = discover_files(dir.path(), &EvolutionConfig::default());
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.py"));
        assert_eq!(stats.selected, 1);
        assert!(!stats.capped);
    }

    #[test]
    fn test_cap_truncates_deterministically() {
        let dir = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(dir.path().join(format!("f{i}.py")), "x = 1\n").unwrap();
        }
        let config = EvolutionConfig {
            max_files: Some(3),
            ..Default::default()
        };
        let (files, stats) = discover_files(dir.path(), &config);
        assert_eq!(files.len(), 3);
        assert!(stats.capped);
        assert!(files[0].ends_with("f0.py"));
    }
}

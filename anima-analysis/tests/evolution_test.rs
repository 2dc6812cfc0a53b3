//! End-to-end evolution tests against real git repositories.

use std::fs;
use std::path::Path;

use git2::{Commit, Repository, Signature, Time};
use tempfile::TempDir;

use anima_analysis::history::{GitRevisionSource, RevisionSource, RevisionWalker};
use anima_analysis::{EvolutionAnalyzer, Vocabulary};
use anima_core::config::EvolutionConfig;
use anima_core::errors::{AnalysisError, HistoryError};

const RICH_SOURCE: &str = r#"
def validate_batch(orders: list) -> int:
    """Check each order and count the valid ones."""
    valid = 0
    total = 0
    for order in orders:
        if check_order(order):
            valid += 1
        total += 1
    report(valid)
    return valid
"#;

const BARE_SOURCE: &str = "def tick():\n    pass\n";

/// Write `content` to `name` and commit it at the given timestamp.
fn commit_file(repo: &Repository, name: &str, content: &str, message: &str, seconds: i64) {
    let workdir = repo.workdir().unwrap();
    fs::write(workdir.join(name), content).unwrap();

    let mut index = repo.index().unwrap();
    index.add_path(Path::new(name)).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();

    let sig = Signature::new("Tester", "tester@example.com", &Time::new(seconds, 0)).unwrap();
    let parent = repo.head().ok().and_then(|h| h.peel_to_commit().ok());
    let parents: Vec<&Commit> = parent.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
        .unwrap();
}

fn analyzer() -> EvolutionAnalyzer {
    EvolutionAnalyzer::new(EvolutionConfig::default(), Vocabulary::builtin())
}

#[test]
fn test_walker_returns_chronological_records() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    commit_file(&repo, "alpha.py", BARE_SOURCE, "gut alpha", 2_000);

    let source = GitRevisionSource::open(dir.path()).unwrap();
    let walker = RevisionWalker::new(&source, 50);
    let records = walker.walk(&dir.path().join("alpha.py"));

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].info.summary, "add alpha");
    assert_eq!(records[1].info.summary, "gut alpha");
    assert_eq!(records[0].source_text, RICH_SOURCE);
    assert_eq!(records[1].source_text, BARE_SOURCE);
    assert!(records[0].info.timestamp < records[1].info.timestamp);
}

#[test]
fn test_untouched_file_has_no_history() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    fs::write(dir.path().join("beta.py"), BARE_SOURCE).unwrap();

    let source = GitRevisionSource::open(dir.path()).unwrap();
    let revisions = source
        .list_revisions(&dir.path().join("beta.py"), 50)
        .unwrap();
    assert!(revisions.is_empty());

    let walker = RevisionWalker::new(&source, 50);
    assert!(walker.walk(&dir.path().join("beta.py")).is_empty());
}

#[test]
fn test_listing_respects_cap_most_recent_first() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    for i in 0..4i64 {
        let content = format!("def tick():\n    x = {i}\n    return x\n");
        commit_file(&repo, "alpha.py", &content, &format!("edit {i}"), 1_000 * (i + 1));
    }

    let source = GitRevisionSource::open(dir.path()).unwrap();
    let revisions = source
        .list_revisions(&dir.path().join("alpha.py"), 2)
        .unwrap();
    assert_eq!(revisions.len(), 2);
    assert_eq!(revisions[0].summary, "edit 3");
    assert_eq!(revisions[1].summary, "edit 2");
}

#[test]
fn test_commits_not_touching_file_are_skipped() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    commit_file(&repo, "other.py", BARE_SOURCE, "add other", 2_000);

    let source = GitRevisionSource::open(dir.path()).unwrap();
    let revisions = source
        .list_revisions(&dir.path().join("alpha.py"), 50)
        .unwrap();
    assert_eq!(revisions.len(), 1);
    assert_eq!(revisions[0].summary, "add alpha");
}

#[test]
fn test_evolution_report_aggregates() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    commit_file(&repo, "alpha.py", BARE_SOURCE, "gut alpha", 2_000);
    // In the working tree but never committed: no history.
    fs::write(dir.path().join("beta.py"), BARE_SOURCE).unwrap();

    let report = analyzer().analyze(dir.path()).unwrap();

    assert_eq!(report.files.len(), 2);
    let alpha = &report.files["alpha.py"];
    let beta = &report.files["beta.py"];

    assert_eq!(alpha.snapshots.len(), 2);
    assert!(alpha.consciousness_trend < -0.05);
    assert!(!alpha.is_healthy);
    assert!(beta.snapshots.is_empty());

    // Files with empty history are excluded from the average, so the
    // aggregate trend equals alpha's own.
    assert_eq!(report.avg_consciousness_trend, alpha.consciousness_trend);
    assert_eq!(report.healthy_files + report.unhealthy_files, 1);
    assert_eq!(report.unhealthy_files, 1);
    assert!(report
        .critical_events
        .iter()
        .all(|event| event.starts_with("alpha.py: ")));
    assert!(report
        .critical_events
        .iter()
        .any(|event| event.contains("declining consciousness")));
}

#[test]
fn test_report_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    commit_file(&repo, "alpha.py", BARE_SOURCE, "gut alpha", 2_000);

    let report = analyzer().analyze(dir.path()).unwrap();
    let json = serde_json::to_string_pretty(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert!(value["files"]["alpha.py"]["snapshots"].is_array());
    assert_eq!(
        value["files"]["alpha.py"]["snapshots"][0]["phase"],
        report.files["alpha.py"].snapshots[0].phase.name()
    );
}

#[test]
fn test_single_file_entry_point() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", RICH_SOURCE, "add alpha", 1_000);
    commit_file(&repo, "alpha.py", BARE_SOURCE, "gut alpha", 2_000);

    let analysis = analyzer()
        .analyze_file(dir.path(), &dir.path().join("alpha.py"))
        .unwrap();
    assert_eq!(analysis.path, "alpha.py");
    assert_eq!(analysis.snapshots.len(), 2);
}

#[test]
fn test_missing_repository_is_fatal() {
    let dir = TempDir::new().unwrap();
    let err = analyzer().analyze(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        AnalysisError::History(HistoryError::RepositoryNotFound { .. })
    ));
}

#[test]
fn test_broken_historical_revision_is_skipped() {
    let dir = TempDir::new().unwrap();
    let repo = Repository::init(dir.path()).unwrap();
    commit_file(&repo, "alpha.py", "def broken(:\n    pass\n", "mid-edit", 1_000);
    commit_file(&repo, "alpha.py", RICH_SOURCE, "fixed", 2_000);
    commit_file(&repo, "alpha.py", BARE_SOURCE, "gutted", 3_000);

    let report = analyzer().analyze(dir.path()).unwrap();
    let alpha = &report.files["alpha.py"];
    assert_eq!(alpha.snapshots.len(), 2);
    assert_eq!(alpha.snapshots[0].message, "fixed");
    assert_eq!(alpha.snapshots[1].message, "gutted");
}

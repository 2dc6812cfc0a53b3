//! Git revision backend via libgit2.
//!
//! An in-process binding instead of shelling out to the git binary; the
//! degradation contract is the same — a missing repository is fatal, a
//! file without history is not.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use git2::{Commit, Oid, Repository, Sort};

use anima_core::errors::HistoryError;

use super::traits::RevisionSource;
use super::types::RevisionInfo;

/// Read-only revision source backed by a local git repository.
///
/// Concurrent instances against the same repository are safe; each
/// worker opens its own.
pub struct GitRevisionSource {
    repo: Repository,
    workdir: PathBuf,
}

impl GitRevisionSource {
    /// Open the repository containing `path`.
    ///
    /// Absence of a repository is a configuration error, fatal at
    /// startup.
    pub fn open(path: &Path) -> Result<Self, HistoryError> {
        let repo = Repository::discover(path).map_err(|e| HistoryError::RepositoryNotFound {
            path: path.to_path_buf(),
            message: e.message().to_string(),
        })?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| HistoryError::BareRepository {
                path: path.to_path_buf(),
            })?
            .to_path_buf();
        Ok(Self { repo, workdir })
    }

    /// A path relative to the repository working directory.
    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.workdir).unwrap_or(path)
    }
}

impl RevisionSource for GitRevisionSource {
    fn list_revisions(&self, path: &Path, max: usize) -> Result<Vec<RevisionInfo>, HistoryError> {
        let rel = self.relative(path);
        let mut walk = self.repo.revwalk().map_err(backend)?;
        walk.push_head().map_err(backend)?;
        walk.set_sorting(Sort::TIME).map_err(backend)?;

        let mut revisions = Vec::new();
        for oid in walk {
            let oid = oid.map_err(backend)?;
            let commit = self.repo.find_commit(oid).map_err(backend)?;
            if touches_path(&commit, rel) {
                revisions.push(revision_info(&commit));
                if revisions.len() >= max {
                    break;
                }
            }
        }
        // Most-recent-first, matching the backend's natural order.
        Ok(revisions)
    }

    fn fetch_content(&self, revision_id: &str, path: &Path) -> Result<String, HistoryError> {
        let oid = Oid::from_str(revision_id).map_err(|_| HistoryError::InvalidRevision {
            revision: revision_id.to_string(),
        })?;
        let commit = self.repo.find_commit(oid).map_err(backend)?;
        let tree = commit.tree().map_err(backend)?;
        let entry = tree.get_path(self.relative(path)).map_err(backend)?;
        let blob = self.repo.find_blob(entry.id()).map_err(backend)?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}

fn backend(e: git2::Error) -> HistoryError {
    HistoryError::Backend(e.message().to_string())
}

/// True when the commit changed the blob at `rel` relative to its first
/// parent (or introduced it, for a root commit).
fn touches_path(commit: &Commit<'_>, rel: &Path) -> bool {
    let own = blob_id(commit, rel);
    if commit.parent_count() == 0 {
        return own.is_some();
    }
    match commit.parent(0) {
        Ok(parent) => own != blob_id(&parent, rel),
        Err(_) => own.is_some(),
    }
}

fn blob_id(commit: &Commit<'_>, rel: &Path) -> Option<Oid> {
    commit.tree().ok()?.get_path(rel).ok().map(|e| e.id())
}

fn revision_info(commit: &Commit<'_>) -> RevisionInfo {
    let timestamp = DateTime::<Utc>::from_timestamp(commit.time().seconds(), 0)
        .unwrap_or_else(|| DateTime::<Utc>::UNIX_EPOCH);
    RevisionInfo {
        id: commit.id().to_string(),
        timestamp,
        author: commit.author().name().unwrap_or("unknown").to_string(),
        summary: commit.summary().unwrap_or("").to_string(),
    }
}

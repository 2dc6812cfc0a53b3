//! Revision history subsystem — backend trait, git binding, and the
//! ordered walker.

pub mod git;
pub mod traits;
pub mod types;

use std::path::Path;

use tracing::debug;

pub use git::GitRevisionSource;
pub use traits::RevisionSource;
pub use types::{RevisionInfo, RevisionRecord};

/// Walks one file's history oldest-to-newest, resolving content per
/// revision.
///
/// Takes the most recent `max_revisions` entries and reverses them to
/// chronological order before replay, so results are deterministic no
/// matter how many revisions exist beyond the cap. Listing failures
/// degrade to an empty walk; fetch failures skip that single revision.
pub struct RevisionWalker<'s, S: RevisionSource> {
    source: &'s S,
    max_revisions: usize,
}

impl<'s, S: RevisionSource> RevisionWalker<'s, S> {
    pub fn new(source: &'s S, max_revisions: usize) -> Self {
        Self {
            source,
            max_revisions,
        }
    }

    /// Resolve the file's replayable history, oldest revision first.
    pub fn walk(&self, path: &Path) -> Vec<RevisionRecord> {
        let mut revisions = match self.source.list_revisions(path, self.max_revisions) {
            Ok(revisions) => revisions,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "no history for file");
                return Vec::new();
            }
        };
        revisions.truncate(self.max_revisions);
        revisions.reverse();

        revisions
            .into_iter()
            .filter_map(|info| match self.source.fetch_content(&info.id, path) {
                Ok(source_text) => Some(RevisionRecord { info, source_text }),
                Err(e) => {
                    debug!(
                        path = %path.display(),
                        revision = %info.id,
                        error = %e,
                        "skipping unreadable revision"
                    );
                    None
                }
            })
            .collect()
    }
}

use git2::{Commit, Oid, Repository};
use std::path::Path;

use super::format;
use super::{CommitRange, CommitSummary, LogSource};
use crate::error::Result;

/// Wrapper around a git2 Repository for log queries.
///
/// Provides the read-only commit walk git-tickets needs: all commits
/// reachable from the range end but not from the range start, merge commits
/// excluded, rendered with a pretty-format template.
pub struct Git2LogSource {
    repo: Repository,
}

impl Git2LogSource {
    /// Creates a Git2LogSource for the current working directory.
    ///
    /// Discovers the git repository in the current directory or parent
    /// directories.
    pub fn discover() -> Result<Self> {
        let repo = Repository::discover(".")?;
        Ok(Git2LogSource { repo })
    }

    /// Creates a Git2LogSource for an explicit repository path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let repo = Repository::discover(path.as_ref())?;
        Ok(Git2LogSource { repo })
    }

    /// Resolves a reference string (SHA, tag, or symbolic ref such as HEAD)
    /// to the commit it points at.
    ///
    /// Failures surface the underlying git2 error unmodified.
    fn resolve_commit_oid(&self, refname: &str) -> Result<Oid> {
        let object = self.repo.revparse_single(refname)?;
        let commit = object.peel_to_commit()?;
        Ok(commit.id())
    }

    fn summarize(commit: &Commit<'_>) -> CommitSummary {
        let id = commit.id().to_string();
        let short_id = id[..7.min(id.len())].to_string();

        CommitSummary {
            id,
            short_id,
            subject: commit.summary().unwrap_or("").to_string(),
            body: commit.body().unwrap_or("").to_string(),
            message: commit.message().unwrap_or("").to_string(),
            author_name: commit.author().name().unwrap_or("").to_string(),
            author_email: commit.author().email().unwrap_or("").to_string(),
            committer_name: commit.committer().name().unwrap_or("").to_string(),
            committer_email: commit.committer().email().unwrap_or("").to_string(),
        }
    }
}

impl LogSource for Git2LogSource {
    fn changelog(&self, range: &CommitRange, pretty: &str) -> Result<String> {
        let to_oid = self.resolve_commit_oid(range.to())?;
        let from_oid = self.resolve_commit_oid(range.from())?;

        // Walk commits reachable from `to` but not from `from`, in the
        // log's native order (newest first).
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push(to_oid)?;
        revwalk.hide(from_oid)?;

        let mut entries = Vec::new();
        for oid in revwalk {
            let oid = oid?;
            let commit = self.repo.find_commit(oid)?;

            // Merge commits are excluded from the changelog
            if commit.parent_count() > 1 {
                continue;
            }

            entries.push(format::render(&Self::summarize(&commit), pretty));
        }

        Ok(entries.join("\n"))
    }
}

use std::cell::Cell;

use super::format;
use super::{CommitRange, CommitSummary, LogSource};
use crate::error::Result;

/// Mock log source for testing without actual git operations
///
/// Holds a fixed list of commits (newest first, matching log order) and
/// renders them with the same pretty-format code as the real source. Counts
/// queries so tests can assert that a short-circuited invocation never
/// touched the repository.
pub struct MockLogSource {
    commits: Vec<CommitSummary>,
    queries: Cell<usize>,
}

impl MockLogSource {
    /// Create a new empty mock source
    pub fn new() -> Self {
        MockLogSource {
            commits: Vec::new(),
            queries: Cell::new(0),
        }
    }

    /// Add a commit with the given subject line and placeholder metadata
    pub fn add_subject(&mut self, subject: &str) {
        let n = self.commits.len();
        let id = format!("{:040x}", n + 1);
        let short_id = id[..7].to_string();
        self.commits.push(CommitSummary {
            id,
            short_id,
            subject: subject.to_string(),
            body: String::new(),
            message: format!("{}\n", subject),
            author_name: "Test Author".to_string(),
            author_email: "author@example.com".to_string(),
            committer_name: "Test Committer".to_string(),
            committer_email: "committer@example.com".to_string(),
        });
    }

    /// Add a fully specified commit
    pub fn add_commit(&mut self, commit: CommitSummary) {
        self.commits.push(commit);
    }

    /// Number of changelog queries served so far
    pub fn query_count(&self) -> usize {
        self.queries.get()
    }
}

impl Default for MockLogSource {
    fn default() -> Self {
        MockLogSource::new()
    }
}

impl LogSource for MockLogSource {
    fn changelog(&self, _range: &CommitRange, pretty: &str) -> Result<String> {
        self.queries.set(self.queries.get() + 1);

        let entries: Vec<String> = self
            .commits
            .iter()
            .map(|commit| format::render(commit, pretty))
            .collect();
        Ok(entries.join("\n"))
    }
}

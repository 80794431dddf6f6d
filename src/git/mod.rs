//! Git log access abstraction layer
//!
//! This module provides a trait-based abstraction over the one repository
//! query git-tickets performs: rendering the commit log between two
//! references. The concrete implementations include:
//!
//! - [repository::Git2LogSource]: A real implementation using the `git2` crate
//! - [mock::MockLogSource]: A mock implementation for testing
//!
//! Most code should depend on the [LogSource] trait rather than concrete
//! implementations to enable easy testing and flexibility.

pub mod format;
pub mod mock;
pub mod repository;

pub use mock::MockLogSource;
pub use repository::Git2LogSource;

use crate::error::Result;

/// A validated commit range: the set of commits reachable from `to` but not
/// from `from`, excluding merge commits.
///
/// Construction rejects empty references. An absent range is a defined
/// "nothing to look up" outcome for the caller, not a fault.
#[derive(Debug, Clone, PartialEq)]
pub struct CommitRange {
    from: String,
    to: String,
}

impl CommitRange {
    /// Build a range from two reference strings.
    ///
    /// Returns `None` if either reference is empty (after trimming), which
    /// callers treat as the "no log" outcome.
    pub fn new(from: &str, to: &str) -> Option<Self> {
        if from.trim().is_empty() || to.trim().is_empty() {
            return None;
        }
        Some(CommitRange {
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    /// The range start reference (excluded from the walk).
    pub fn from(&self) -> &str {
        &self.from
    }

    /// The range end reference (included in the walk).
    pub fn to(&self) -> &str {
        &self.to
    }
}

/// Per-commit fields available to pretty-format rendering
#[derive(Debug, Clone, PartialEq)]
pub struct CommitSummary {
    /// Full commit hash
    pub id: String,
    /// Abbreviated commit hash
    pub short_id: String,
    /// Subject line of the commit message
    pub subject: String,
    /// Message body (everything after the subject, may be empty)
    pub body: String,
    /// Full raw commit message
    pub message: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Committer name
    pub committer_name: String,
    /// Committer email
    pub committer_email: String,
}

/// Log query trait for abstraction
///
/// Abstracts the read-only repository query so the orchestration logic can be
/// tested against [mock::MockLogSource] without a real repository.
///
/// Implementations map underlying errors (like `git2::Error`) into
/// [crate::error::GitTicketsError].
///
/// # Example
/// ```rust
/// # use git_tickets::git::{CommitRange, LogSource};
/// # fn example<S: LogSource>(source: &S) -> Result<(), Box<dyn std::error::Error>> {
/// if let Some(range) = CommitRange::new("v1.0.0", "HEAD") {
///     let log = source.changelog(&range, "%s")?;
///     println!("{}", log);
/// }
/// # Ok(())
/// # }
/// ```
pub trait LogSource {
    /// Render the log of the given range, one commit per pretty-formatted
    /// entry, joined by newlines, in the log's native order (newest first).
    ///
    /// Merge commits are excluded. An empty range yields an empty string.
    fn changelog(&self, range: &CommitRange, pretty: &str) -> Result<String>;
}

/// Fetch the formatted log between two references.
///
/// The precondition check from the range type applies here: if either
/// reference is empty this returns `Ok(None)` without querying the source.
/// An in-range result with no commits comes back as `Ok(Some(""))`; callers
/// treat both the same way.
pub fn fetch_log<S: LogSource>(
    source: &S,
    from: &str,
    to: &str,
    pretty: &str,
) -> Result<Option<String>> {
    match CommitRange::new(from, to) {
        Some(range) => source.changelog(&range, pretty).map(Some),
        None => Ok(None),
    }
}

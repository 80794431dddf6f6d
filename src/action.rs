//! The find-commits action: fetch the log for a commit range and extract
//! ticket identifiers from it.
//!
//! Separated from CLI argument parsing so the action can be invoked
//! programmatically (and tested against a mock log source) without clap.

use regex::Regex;

use crate::config::Options;
use crate::error::{GitTicketsError, Result};
use crate::git::{self, LogSource};
use crate::tickets;
use crate::ui;

/// Run the action against a log source with fully-resolved options.
///
/// The matching pattern is compiled first; an invalid pattern fails the
/// invocation before any repository query. An absent range (empty `from` or
/// `to`) or an empty log is a normal terminal outcome: a "no issues" notice
/// and an empty result. Otherwise the extracted identifiers are returned,
/// unique and in first-seen order, and echoed as a notice.
pub fn run<S: LogSource>(source: &S, options: &Options) -> Result<Vec<String>> {
    let pattern = Regex::new(&options.matching)
        .map_err(|e| GitTicketsError::pattern(options.matching.clone(), e))?;

    let changelog = git::fetch_log(source, &options.from, &options.to, &options.pretty)?;

    let log = match changelog {
        Some(ref log) if !log.is_empty() => log,
        _ => {
            ui::display_no_issues();
            return Ok(Vec::new());
        }
    };

    let tickets = tickets::extract(log, &pattern);
    if tickets.is_empty() {
        ui::display_no_issues();
    } else {
        ui::display_tickets(&tickets);
    }

    Ok(tickets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_MATCHING, DEFAULT_REF};
    use crate::git::MockLogSource;

    fn options(from: &str, to: &str, matching: &str) -> Options {
        Options {
            from: from.to_string(),
            to: to.to_string(),
            matching: matching.to_string(),
            pretty: "%s".to_string(),
        }
    }

    #[test]
    fn test_invalid_pattern_fails_before_any_query() {
        let source = MockLogSource::new();
        let result = run(&source, &options("v1.0.0", "HEAD", "([A-Z"));

        assert!(matches!(result, Err(GitTicketsError::Pattern { .. })));
        assert_eq!(source.query_count(), 0);
    }

    #[test]
    fn test_empty_from_returns_empty_without_query() {
        let mut source = MockLogSource::new();
        source.add_subject("Fix ABC-123");

        let tickets = run(&source, &options("", "HEAD", DEFAULT_MATCHING)).unwrap();
        assert!(tickets.is_empty());
        assert_eq!(source.query_count(), 0);
    }

    #[test]
    fn test_empty_to_returns_empty_without_query() {
        let source = MockLogSource::new();
        let tickets = run(&source, &options(DEFAULT_REF, "", DEFAULT_MATCHING)).unwrap();
        assert!(tickets.is_empty());
        assert_eq!(source.query_count(), 0);
    }

    #[test]
    fn test_empty_log_is_a_normal_outcome() {
        let source = MockLogSource::new();
        let tickets = run(&source, &options("v1.0.0", "HEAD", DEFAULT_MATCHING)).unwrap();
        assert!(tickets.is_empty());
        assert_eq!(source.query_count(), 1);
    }

    #[test]
    fn test_extracts_unique_tickets_in_order() {
        let mut source = MockLogSource::new();
        source.add_subject("Fix bug ABC-123");
        source.add_subject("Refactor");
        source.add_subject("See ABC-123 and DEF-456");

        let tickets = run(&source, &options("v1.0.0", "HEAD", DEFAULT_MATCHING)).unwrap();
        assert_eq!(tickets, vec!["ABC-123", "DEF-456"]);
    }

    #[test]
    fn test_run_is_idempotent() {
        let mut source = MockLogSource::new();
        source.add_subject("Fix bug ABC-123");
        source.add_subject("Fix bug XYZ-9");

        let opts = options("v1.0.0", "HEAD", DEFAULT_MATCHING);
        let first = run(&source, &opts).unwrap();
        let second = run(&source, &opts).unwrap();
        assert_eq!(first, second);
    }
}

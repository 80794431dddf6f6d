//! Ticket extraction from log text.
//!
//! The matching pattern is both filter and extractor: lines that match
//! contribute their matched substrings, everything else is dropped. When the
//! pattern has capture groups, each non-empty group of each match contributes
//! one entry; with no groups the whole match is used.

use regex::Regex;
use std::collections::HashSet;

/// Extract ticket identifiers from a formatted git log.
///
/// Splits the log into lines, trims each, and applies the pattern per line
/// (multi-line patterns never match). Empty strings are discarded and
/// duplicates removed, keeping first-occurrence order. Log order is assumed
/// newest first and is preserved.
pub fn extract(log: &str, pattern: &Regex) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tickets = Vec::new();

    for line in log.lines() {
        let line = line.trim();

        for captures in pattern.captures_iter(line) {
            if captures.len() > 1 {
                // Flatten capture groups into individual entries
                for group in captures.iter().skip(1).flatten() {
                    push_unique(group.as_str(), &mut seen, &mut tickets);
                }
            } else if let Some(whole) = captures.get(0) {
                push_unique(whole.as_str(), &mut seen, &mut tickets);
            }
        }
    }

    tickets
}

fn push_unique(candidate: &str, seen: &mut HashSet<String>, tickets: &mut Vec<String>) {
    if candidate.is_empty() {
        return;
    }
    if seen.insert(candidate.to_string()) {
        tickets.push(candidate.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(re: &str) -> Regex {
        Regex::new(re).unwrap()
    }

    #[test]
    fn test_extracts_tickets_in_first_seen_order() {
        let log = "Fix bug ABC-123\nRefactor\nSee ABC-123 and DEF-456";
        let tickets = extract(log, &pattern(r"([A-Z]+-\d+)"));
        assert_eq!(tickets, vec!["ABC-123", "DEF-456"]);
    }

    #[test]
    fn test_empty_log_yields_nothing() {
        assert!(extract("", &pattern(r"([A-Z]+-\d+)")).is_empty());
    }

    #[test]
    fn test_non_matching_lines_are_dropped() {
        let log = "chore: bump deps\ndocs: fix typo";
        assert!(extract(log, &pattern(r"([A-Z]+-\d+)")).is_empty());
    }

    #[test]
    fn test_duplicates_keep_first_occurrence() {
        let log = "ABC-1 first\nDEF-2 middle\nABC-1 again\nABC-1 once more";
        let tickets = extract(log, &pattern(r"([A-Z]+-\d+)"));
        assert_eq!(tickets, vec!["ABC-1", "DEF-2"]);
    }

    #[test]
    fn test_multiple_matches_per_line() {
        let log = "Covers JIRA-1, JIRA-2 and JIRA-3";
        let tickets = extract(log, &pattern(r"([A-Z]+-\d+)"));
        assert_eq!(tickets, vec!["JIRA-1", "JIRA-2", "JIRA-3"]);
    }

    #[test]
    fn test_pattern_without_groups_uses_whole_match() {
        let log = "Fix ABC-123 and DEF-456";
        let tickets = extract(log, &pattern(r"[A-Z]+-\d+"));
        assert_eq!(tickets, vec!["ABC-123", "DEF-456"]);
    }

    #[test]
    fn test_multiple_groups_contribute_separate_entries() {
        let log = "merge ABC-1 into DEF-2";
        let tickets = extract(log, &pattern(r"merge ([A-Z]+-\d+) into ([A-Z]+-\d+)"));
        assert_eq!(tickets, vec!["ABC-1", "DEF-2"]);
    }

    #[test]
    fn test_empty_group_matches_never_contribute() {
        // The group can match zero characters; those matches are dropped.
        let log = "xx\nABC-1 xx";
        let tickets = extract(log, &pattern(r"([A-Z]*-?\d*)"));
        assert!(tickets.iter().all(|t| !t.is_empty()));
        assert!(tickets.contains(&"ABC-1".to_string()));
    }

    #[test]
    fn test_lines_are_trimmed_before_matching() {
        let log = "   ABC-123\t\n  \t ";
        let tickets = extract(log, &pattern(r"^([A-Z]+-\d+)$"));
        assert_eq!(tickets, vec!["ABC-123"]);
    }

    #[test]
    fn test_pattern_never_matches_across_lines() {
        let log = "ABC-\n123";
        assert!(extract(log, &pattern(r"([A-Z]+-\n\d+)")).is_empty());
    }
}

//! Pretty-format rendering of commits.
//!
//! A small subset of `git log --pretty=format:` placeholders, enough for
//! subject/body oriented templates. Rendering is pure so both the real
//! repository and the mock share it.

use super::CommitSummary;

/// Default pretty format: subject line only.
pub const DEFAULT_PRETTY: &str = "%s";

/// Render one commit according to a pretty-format template.
///
/// Supported placeholders: `%H` full hash, `%h` abbreviated hash, `%s`
/// subject, `%b` body, `%B` raw message, `%an`/`%ae` author name/email,
/// `%cn`/`%ce` committer name/email, `%n` newline, `%%` literal percent.
/// Unrecognized placeholders are passed through literally.
pub fn render(commit: &CommitSummary, pretty: &str) -> String {
    let mut out = String::with_capacity(pretty.len() + commit.subject.len());
    let mut chars = pretty.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }

        match chars.next() {
            Some('H') => out.push_str(&commit.id),
            Some('h') => out.push_str(&commit.short_id),
            Some('s') => out.push_str(&commit.subject),
            Some('b') => out.push_str(&commit.body),
            Some('B') => out.push_str(&commit.message),
            Some('n') => out.push('\n'),
            Some('%') => out.push('%'),
            Some('a') => match chars.next() {
                Some('n') => out.push_str(&commit.author_name),
                Some('e') => out.push_str(&commit.author_email),
                Some(other) => {
                    out.push('%');
                    out.push('a');
                    out.push(other);
                }
                None => out.push_str("%a"),
            },
            Some('c') => match chars.next() {
                Some('n') => out.push_str(&commit.committer_name),
                Some('e') => out.push_str(&commit.committer_email),
                Some(other) => {
                    out.push('%');
                    out.push('c');
                    out.push(other);
                }
                None => out.push_str("%c"),
            },
            Some(other) => {
                out.push('%');
                out.push(other);
            }
            // Trailing lone '%' stays literal
            None => out.push('%'),
        }
    }

    out
}

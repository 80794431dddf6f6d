use thiserror::Error;

/// Unified error type for git-tickets operations
#[derive(Error, Debug)]
pub enum GitTicketsError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Invalid matching pattern '{pattern}': {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-tickets
pub type Result<T> = std::result::Result<T, GitTicketsError>;

impl GitTicketsError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        GitTicketsError::Config(msg.into())
    }

    /// Create a pattern error from the failing pattern string and the regex error
    pub fn pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        GitTicketsError::Pattern {
            pattern: pattern.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GitTicketsError::config("missing value");
        assert_eq!(err.to_string(), "Configuration error: missing value");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: GitTicketsError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_pattern_error_names_the_pattern() {
        let bad = regex::Regex::new("([A-Z").unwrap_err();
        let err = GitTicketsError::pattern("([A-Z", bad);
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid matching pattern"));
        assert!(msg.contains("([A-Z"));
    }

    #[test]
    fn test_error_from_git2() {
        let git_err = git2::Error::from_str("bad revision");
        let err: GitTicketsError = git_err.into();
        assert!(err.to_string().contains("Git operation failed"));
        assert!(err.to_string().contains("bad revision"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (GitTicketsError::config("x"), "Configuration error"),
            (
                GitTicketsError::pattern("x(", regex::Regex::new("x(").unwrap_err()),
                "Invalid matching pattern",
            ),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}

use serde::Deserialize;
use std::env;
use std::fs;
use std::path::Path;

use crate::error::{GitTicketsError, Result};
use crate::git::format::DEFAULT_PRETTY;

/// Default reference for both ends of the commit range.
pub const DEFAULT_REF: &str = "HEAD";

/// Default ticket pattern: issue-tracker keys such as `ABC-123`.
pub const DEFAULT_MATCHING: &str = r"([A-Z]+-\d+)";

/// Optional file-level configuration (`gittickets.toml`).
///
/// Every key is optional; the file only supplies values the CLI and
/// environment did not.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct FileConfig {
    pub from: Option<String>,
    pub to: Option<String>,
    pub matching: Option<String>,
    pub pretty: Option<String>,
}

/// Values provided explicitly on the command line.
///
/// `Some` means the flag was given, even if its value is empty; an explicit
/// empty reference is how a caller requests the "no log" outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub from: Option<String>,
    pub to: Option<String>,
    pub matching: Option<String>,
    pub pretty: Option<String>,
}

/// Fully-resolved invocation options.
///
/// Resolution happens once at the boundary; the core logic takes only these
/// values and never touches environment state.
#[derive(Debug, Clone, PartialEq)]
pub struct Options {
    /// Range start reference
    pub from: String,
    /// Range end reference
    pub to: String,
    /// Ticket pattern in string form (compiled by the action)
    pub matching: String,
    /// git pretty-format template
    pub pretty: String,
}

/// Loads file configuration or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `gittickets.toml` in current directory
/// 3. `gittickets.toml` in user config directory
/// 4. Empty configuration if no file found
///
/// A missing file is fine; a file that exists but cannot be read or parsed
/// is an error.
pub fn load_file_config(config_path: Option<&str>) -> Result<FileConfig> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./gittickets.toml").exists() {
        fs::read_to_string("./gittickets.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gittickets.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(FileConfig::default());
        }
    } else {
        return Ok(FileConfig::default());
    };

    let config: FileConfig = toml::from_str(&config_str)
        .map_err(|e| GitTicketsError::config(format!("invalid config file: {}", e)))?;
    Ok(config)
}

/// Resolves invocation options from all configuration layers.
///
/// Precedence per key: CLI flag, then primary environment variable, then
/// legacy environment variable(s), then config file, then built-in default.
/// Environment variables that are set but empty count as unset; an explicit
/// CLI value is used verbatim, empty or not.
pub fn resolve(overrides: &Overrides, file: &FileConfig) -> Options {
    Options {
        from: pick(
            &overrides.from,
            &["GIT_TICKETS_FROM", "FIND_TICKETS_FROM"],
            &file.from,
            DEFAULT_REF,
        ),
        to: pick(
            &overrides.to,
            &[
                "GIT_TICKETS_TO",
                "FIND_TICKETS_TO",
                "GIT_PREVIOUS_SUCCESSFUL_COMMIT",
            ],
            &file.to,
            DEFAULT_REF,
        ),
        matching: pick(
            &overrides.matching,
            &["GIT_TICKETS_MATCHING", "FIND_TICKETS_MATCHING"],
            &file.matching,
            DEFAULT_MATCHING,
        ),
        pretty: pick(
            &overrides.pretty,
            &["GIT_TICKETS_PRETTY_FORMAT", "FIND_TICKETS_PRETTY_FORMAT"],
            &file.pretty,
            DEFAULT_PRETTY,
        ),
    }
}

fn pick(cli: &Option<String>, env_keys: &[&str], file: &Option<String>, default: &str) -> String {
    if let Some(value) = cli {
        return value.clone();
    }

    for key in env_keys {
        if let Ok(value) = env::var(key) {
            if !value.is_empty() {
                return value;
            }
        }
    }

    if let Some(value) = file {
        if !value.is_empty() {
            return value.clone();
        }
    }

    default.to_string()
}

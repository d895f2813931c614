//! Environment configuration for the contact book CLI.
//!
//! # Responsibility
//! - Resolve logging and default-file settings from `CONTACTBOOK_*` variables.
//! - Fall back to stable defaults when a variable is unset or blank.

use contactbook_core::default_log_level;
use std::path::PathBuf;

pub const LOG_LEVEL_VAR: &str = "CONTACTBOOK_LOG_LEVEL";
pub const LOG_DIR_VAR: &str = "CONTACTBOOK_LOG_DIR";
pub const DEFAULT_FILE_VAR: &str = "CONTACTBOOK_DEFAULT_FILE";

const DEFAULT_FILE_NAME: &str = "contacts.txt";
const DEFAULT_LOG_DIR_NAME: &str = "contactbook-logs";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    pub log_level: String,
    pub log_dir: PathBuf,
    /// Used when a save/load filename prompt is answered with an empty line.
    pub default_file: PathBuf,
}

impl CliConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |key: &str| {
            lookup(key)
                .map(|raw| raw.trim().to_string())
                .filter(|raw| !raw.is_empty())
        };

        Self {
            log_level: value(LOG_LEVEL_VAR).unwrap_or_else(|| default_log_level().to_string()),
            log_dir: value(LOG_DIR_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_LOG_DIR_NAME)),
            default_file: value(DEFAULT_FILE_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME)),
        }
    }
}

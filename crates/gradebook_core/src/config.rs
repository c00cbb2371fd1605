//! Runtime configuration for hosts embedding the core.
//!
//! # Responsibility
//! - Collect logging settings from the process environment.
//!
//! # Invariants
//! - Missing or blank variables fall back to build-mode defaults.
//! - Values are passed through untouched; `init_logging` owns validation.

use crate::logging::default_log_level;
use std::path::PathBuf;

/// Environment variable naming the log level (`trace|debug|info|warn|error`).
pub const LOG_LEVEL_ENV: &str = "GRADEBOOK_LOG_LEVEL";
/// Environment variable naming an absolute directory for rolling log files.
pub const LOG_DIR_ENV: &str = "GRADEBOOK_LOG_DIR";

/// Logging settings consumed by `init_logging`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Requested level name, normalized at init time.
    pub level: String,
    /// Rolling file target; `None` logs to stderr.
    pub log_dir: Option<PathBuf>,
}

impl LoggingConfig {
    pub fn new(level: impl Into<String>, log_dir: Option<PathBuf>) -> Self {
        Self {
            level: level.into(),
            log_dir,
        }
    }

    /// Reads `GRADEBOOK_LOG_LEVEL` and `GRADEBOOK_LOG_DIR`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let level = present(LOG_LEVEL_ENV).unwrap_or_else(|| default_log_level().to_string());
        let log_dir = present(LOG_DIR_ENV).map(|value| PathBuf::from(value.trim()));
        Self { level, log_dir }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new(default_log_level(), None)
    }
}

//! User-configurable settings loaded from a TOML file.

use crate::games::tictactoe::SortOrder;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Default settings file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_timetravel.toml";

/// Settings for the terminal client.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Initial history sort order.
    sort: SortOrder,

    /// File the TUI writes its log to.
    log_file: PathBuf,

    /// Filter used when `RUST_LOG` is unset.
    log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort: SortOrder::Ascending,
            log_file: PathBuf::from("strictly_timetravel.log"),
            log_filter: "info".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from TOML, falling back to defaults if the file does
    /// not exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("No settings file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(path)
    }

    /// Loads settings from a TOML file that must exist.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))?;

        info!(sort = ?settings.sort, "Settings loaded");
        Ok(settings)
    }

    /// Returns a copy with the sort order replaced.
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = Settings::load(dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "sort = \"descending\"").expect("write");

        let settings = Settings::load(file.path()).expect("valid settings");
        assert_eq!(*settings.sort(), SortOrder::Descending);
        assert_eq!(settings.log_filter(), "info");
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "sort = \"sideways\"").expect("write");

        let err = Settings::load(file.path()).expect_err("bad sort");
        assert!(err.message.starts_with("Failed to parse settings"));
    }

    #[test]
    fn test_unknown_key_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "sort_order = \"descending\"").expect("write");

        let err = Settings::load(file.path()).expect_err("misspelled key");
        assert!(err.message.starts_with("Failed to parse settings"));
        assert!(err.message.contains("sort_order"));
    }

    #[test]
    fn test_with_sort_overrides() {
        let settings = Settings::default().with_sort(SortOrder::Descending);
        assert_eq!(*settings.sort(), SortOrder::Descending);
    }
}

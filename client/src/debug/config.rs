//! Logging configuration from environment variables

use std::path::PathBuf;

pub const LOG_DIR_ENV: &str = "FOLIO_LOG_DIR";
pub const LOG_JSON_ENV: &str = "FOLIO_LOG_JSON";
pub const DEFAULT_LOG_LEVEL: &str = "folio_client=info,warn";
pub const LOG_FILE_PREFIX: &str = "folio.log";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory for the rotated log files
    pub log_dir: PathBuf,
    /// Filter directives (e.g., "folio_client=debug,info")
    pub log_level: String,
    /// Emit console output as JSON lines
    pub json_console: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            json_console: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            log_dir: std::env::var(LOG_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_level: std::env::var("RUST_LOG").unwrap_or(defaults.log_level),
            json_console: std::env::var(LOG_JSON_ENV)
                .map(|v| v == "1")
                .unwrap_or(defaults.json_console),
        }
    }

    /// Path prefix of the current log file
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(LOG_FILE_PREFIX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LogConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.log_file(), PathBuf::from("logs").join("folio.log"));
        assert!(!config.json_console);
    }
}

//! Logging configuration from environment variables

use std::path::PathBuf;

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_LEVEL: &str = "voxia_client=info,voxia=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level filter (e.g., "voxia_client=debug,info")
    pub log_level: String,
    /// Write to a daily-rotated file in this directory instead of stderr
    pub log_dir: Option<PathBuf>,
    /// Include file/line of each event
    pub with_source: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
            with_source: false,
        }
    }
}

impl LogConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: std::env::var("VOXIA_LOG_DIR").ok().filter(|v| !v.is_empty()).map(PathBuf::from),
            with_source: std::env::var("VOXIA_LOG_SOURCE")
                .map(|v| v == "1")
                .unwrap_or(false),
        }
    }

    /// Raise the filter to debug for the client crates (the CLI's `--verbose`)
    pub fn verbose(mut self) -> Self {
        self.log_level = "voxia_client=debug,voxia=debug,info".to_string();
        self
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}

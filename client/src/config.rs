//! # Client Configuration
//!
//! Configuration loaded from environment variables (and a `.env` file, if present).
//! Values are validated once so a bad URL or timeout fails before the first request.
//!
//! | Variable | Default |
//! |---|---|
//! | `VOXIA_API_URL` | `https://voxia-api.onrender.com` |
//! | `VOXIA_MEDIA_URL` | value of `VOXIA_API_URL` |
//! | `VOXIA_TIMEOUT_SECS` | `10` |
//! | `VOXIA_DATA_DIR` | `.voxia` |

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::error::{AppError, Result};

/// Default API host.
pub const DEFAULT_API_URL: &str = "https://voxia-api.onrender.com";

/// Fixed request timeout used unless overridden.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_TIMEOUT_SECS: u64 = 120;
const STORAGE_FILE: &str = "storage.json";

/// Voxia client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL every `/api/...` path is appended to.
    pub api_base_url: String,

    /// Base URL server-relative media paths are resolved against.
    pub media_base_url: String,

    /// Per-request timeout.
    pub timeout: Duration,

    /// Directory holding the local key-value store (auth token).
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            media_base_url: DEFAULT_API_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            data_dir: PathBuf::from(".voxia"),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the environment and validate it.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let api_base_url = env::var("VOXIA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let media_base_url = env::var("VOXIA_MEDIA_URL").unwrap_or_else(|_| api_base_url.clone());

        let timeout = match env::var("VOXIA_TIMEOUT_SECS") {
            Ok(raw) => Duration::from_secs(raw.trim().parse().map_err(|e| {
                AppError::Config(format!("VOXIA_TIMEOUT_SECS must be a whole number of seconds: {}", e))
            })?),
            Err(_) => DEFAULT_TIMEOUT,
        };

        let data_dir = env::var("VOXIA_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(".voxia"));

        let config = Self {
            api_base_url: trim_base(&api_base_url),
            media_base_url: trim_base(&media_base_url),
            timeout,
            data_dir,
        };
        config.validate()?;
        Ok(config)
    }

    /// Point the client at another API host. Media follow unless configured separately.
    pub fn with_api_base_url(mut self, url: impl AsRef<str>) -> Self {
        let url = trim_base(url.as_ref());
        if self.media_base_url == self.api_base_url {
            self.media_base_url = url.clone();
        }
        self.api_base_url = url;
        self
    }

    pub fn with_data_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.data_dir = dir.as_ref().to_path_buf();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Validate URLs and the timeout range.
    pub fn validate(&self) -> Result<()> {
        for (name, url) in [("VOXIA_API_URL", &self.api_base_url), ("VOXIA_MEDIA_URL", &self.media_base_url)] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(AppError::Config(format!("{} must be an http(s) URL, got '{}'", name, url)));
            }
        }

        let secs = self.timeout.as_secs();
        if secs == 0 || secs > MAX_TIMEOUT_SECS {
            return Err(AppError::Config(format!(
                "VOXIA_TIMEOUT_SECS must be between 1 and {}",
                MAX_TIMEOUT_SECS
            )));
        }

        Ok(())
    }

    /// Path of the JSON file backing the local key-value store.
    pub fn storage_file(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }
}

fn trim_base(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

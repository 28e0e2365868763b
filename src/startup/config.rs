//! Startup configuration.

use std::path::PathBuf;

use crate::backend::DEFAULT_BACKEND_URL;
use crate::models::DEFAULT_KEYWORDS;

pub const ENV_BACKEND_URL: &str = "JOBBOT_BACKEND_URL";
pub const ENV_LOG_FILE: &str = "JOBBOT_LOG_FILE";
pub const ENV_KEYWORDS: &str = "JOBBOT_KEYWORDS";

/// Configuration for starting the TUI or a one-shot command.
///
/// Use the builder pattern to customize startup behavior.
///
/// ```
/// use jobbot::startup::StartupConfig;
///
/// let config = StartupConfig::default()
///     .with_backend_url("http://127.0.0.1:5000/")
///     .with_skip_health_check(true);
/// assert_eq!(config.backend_url, "http://127.0.0.1:5000");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartupConfig {
    /// Base URL of the bot backend, without a trailing slash
    pub backend_url: String,
    /// Log file override; `None` means the platform data directory
    pub log_file: Option<PathBuf>,
    /// Initial value of the keywords field
    pub default_keywords: String,
    /// Skip the background reachability probe
    pub skip_health_check: bool,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            log_file: None,
            default_keywords: DEFAULT_KEYWORDS.to_string(),
            skip_health_check: false,
        }
    }
}

impl StartupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base URL. A trailing slash is dropped.
    pub fn with_backend_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.backend_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_default_keywords(mut self, keywords: impl Into<String>) -> Self {
        self.default_keywords = keywords.into();
        self
    }

    pub fn with_skip_health_check(mut self, skip: bool) -> Self {
        self.skip_health_check = skip;
        self
    }

    /// Defaults overlaid with `JOBBOT_*` environment variables.
    ///
    /// Empty variables count as unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_var(ENV_BACKEND_URL) {
            config = config.with_backend_url(url);
        }
        if let Some(path) = non_empty_var(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(keywords) = non_empty_var(ENV_KEYWORDS) {
            config = config.with_default_keywords(keywords);
        }
        config
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

//! API endpoint configuration.
//!
//! A single [`ApiConfig`] is resolved at process start and injected into the
//! client. Nothing below this module hardcodes a URL.

use std::time::Duration;

/// Backend origin used when nothing else is configured (local development).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Route prefix all backend endpoints live under.
pub const DEFAULT_PATH_PREFIX: &str = "/api/v1";

/// Uniform per-request timeout applied by the production transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for reaching the backend API.
///
/// Use the builder pattern to customize, or [`ApiConfig::from_env`] to pick
/// up the environment.
///
/// # Example
///
/// ```ignore
/// use fukabori::config::ApiConfig;
///
/// let config = ApiConfig::default()
///     .with_base_url("http://192.168.1.20:8000")
///     .with_timeout(std::time::Duration::from_secs(5));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Backend origin: scheme, host, port. Stored without a trailing slash.
    pub base_url: String,
    /// Route prefix appended to the origin (leading slash, no trailing slash).
    pub path_prefix: String,
    /// Per-request timeout enforced by the transport (default: 10s)
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            path_prefix: DEFAULT_PATH_PREFIX.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Create a new ApiConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend origin. A trailing slash is stripped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the route prefix. A trailing slash is stripped.
    pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        self.path_prefix = prefix.trim_end_matches('/').to_string();
        self
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Create config from the environment.
    ///
    /// Reads `FUKABORI_API_URL`, `FUKABORI_API_PREFIX` and
    /// `FUKABORI_API_TIMEOUT_SECS`; anything unset or unparsable falls back
    /// to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("FUKABORI_API_URL") {
            config = config.with_base_url(url);
        }
        if let Ok(prefix) = std::env::var("FUKABORI_API_PREFIX") {
            config = config.with_path_prefix(prefix);
        }
        if let Some(secs) = std::env::var("FUKABORI_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
        {
            config = config.with_timeout(Duration::from_secs(secs));
        }

        config
    }

    /// Build a full endpoint URL from a path like `/media/3`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.path_prefix, path)
    }
}

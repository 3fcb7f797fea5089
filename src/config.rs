//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Rejected configuration value.
#[derive(Error, Debug, PartialEq, Eq)]
#[error("Invalid configuration: {0}")]
pub struct ConfigError(pub String);

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub max_entries: usize,
    /// Default TTL in milliseconds for entries without explicit TTL
    pub default_ttl_ms: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval_secs: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the upstream user API
    pub api_base_url: String,
    /// Extra attempts after a failed upstream fetch
    pub fetch_retries: u32,
    /// Per-request timeout for upstream calls, in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 100)
    /// - `CACHE_DEFAULT_TTL_MS` - Default TTL in milliseconds (default: 300000)
    /// - `CACHE_CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `API_BASE_URL` - Upstream user API (default: https://jsonplaceholder.typicode.com)
    /// - `FETCH_RETRIES` - Retries after a failed fetch (default: 2)
    /// - `REQUEST_TIMEOUT` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_entries: env_or("CACHE_MAX_ENTRIES", defaults.max_entries),
            default_ttl_ms: env_or("CACHE_DEFAULT_TTL_MS", defaults.default_ttl_ms),
            cleanup_interval_secs: env_or("CACHE_CLEANUP_INTERVAL", defaults.cleanup_interval_secs),
            server_port: env_or("SERVER_PORT", defaults.server_port),
            api_base_url: env::var("API_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.api_base_url),
            fetch_retries: env_or("FETCH_RETRIES", defaults.fetch_retries),
            request_timeout_secs: env_or("REQUEST_TIMEOUT", defaults.request_timeout_secs),
        }
    }

    /// Checks that the values describe a usable service.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_entries == 0 {
            return Err(ConfigError("max_entries must be at least 1".to_string()));
        }
        if self.default_ttl_ms == 0 {
            return Err(ConfigError("default_ttl_ms must be positive".to_string()));
        }
        if self.cleanup_interval_secs == 0 {
            return Err(ConfigError("cleanup_interval_secs must be positive".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError("request_timeout_secs must be positive".to_string()));
        }
        let base_url = reqwest::Url::parse(&self.api_base_url).map_err(|err| {
            ConfigError(format!("api_base_url '{}' is not a URL: {}", self.api_base_url, err))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }
        Ok(())
    }

    pub fn default_ttl(&self) -> Duration {
        Duration::from_millis(self.default_ttl_ms)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_entries: 100,
            default_ttl_ms: 5 * 60 * 1000,
            cleanup_interval_secs: 60,
            server_port: 3000,
            api_base_url: "https://jsonplaceholder.typicode.com".to_string(),
            fetch_retries: 2,
            request_timeout_secs: 10,
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

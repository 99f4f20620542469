//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (CURIO_*)
//! 2. TOML config file (if CURIO_CONFIG_FILE set)
//! 3. Built-in defaults

use std::path::PathBuf;
use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (CURIO_*)
/// 2. TOML config file (if CURIO_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Brave API subscription token for web search.
    ///
    /// Set via CURIO_BRAVE_API_KEY environment variable.
    /// Required only when a real (non-mock) search is executed.
    #[serde(default)]
    pub brave_api_key: Option<String>,

    /// Path to the SQLite cache database.
    ///
    /// Set via CURIO_DB_PATH environment variable.
    #[serde(default = "default_db_path")]
    pub db_path: PathBuf,

    /// Serve deterministic synthetic results instead of calling the
    /// provider. No credential and no network needed.
    ///
    /// Set via CURIO_MOCK_SEARCH environment variable.
    #[serde(default)]
    pub mock_search: bool,

    /// Cache entry lifetime in hours.
    ///
    /// Set via CURIO_CACHE_TTL_HOURS environment variable.
    #[serde(default = "default_cache_ttl_hours")]
    pub cache_ttl_hours: i64,

    /// Number of results requested from the provider per query (1-20).
    ///
    /// Set via CURIO_RESULT_COUNT environment variable.
    #[serde(default = "default_result_count")]
    pub result_count: u8,

    /// User-Agent string for provider requests.
    ///
    /// Set via CURIO_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Provider request timeout in milliseconds.
    ///
    /// Set via CURIO_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_db_path() -> PathBuf {
    PathBuf::from("./curio-cache.sqlite")
}

fn default_cache_ttl_hours() -> i64 {
    24
}

fn default_result_count() -> u8 {
    5
}

fn default_user_agent() -> String {
    "curio/0.1".into()
}

fn default_timeout_ms() -> u64 {
    20_000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            brave_api_key: None,
            db_path: default_db_path(),
            mock_search: false,
            cache_ttl_hours: default_cache_ttl_hours(),
            result_count: default_result_count(),
            user_agent: default_user_agent(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Cache lifetime in seconds, as stored alongside each entry.
    pub fn cache_ttl_seconds(&self) -> i64 {
        self.cache_ttl_hours * 3600
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `CURIO_`
    /// 2. TOML file from `CURIO_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("CURIO_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment = figment.merge(
            Env::prefixed("CURIO_")
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        );

        let config: Self = figment.extract().map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    /// Check that the Brave API key is available (deferred validation).
    ///
    /// Absence is only an error at the point a real provider call is about
    /// to be made, so mock-mode deployments need no credential.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` if the Brave API key is not set.
    pub fn require_brave_api_key(&self) -> Result<&str, ConfigError> {
        self.brave_api_key.as_deref().ok_or_else(|| ConfigError::Missing {
            field: "brave_api_key".into(),
            hint: "Set CURIO_BRAVE_API_KEY environment variable".into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.db_path, PathBuf::from("./curio-cache.sqlite"));
        assert!(!config.mock_search);
        assert_eq!(config.cache_ttl_hours, 24);
        assert_eq!(config.result_count, 5);
        assert_eq!(config.user_agent, "curio/0.1");
        assert_eq!(config.timeout_ms, 20_000);
        assert!(config.brave_api_key.is_none());
    }

    #[test]
    fn test_derived_durations() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(20_000));
        assert_eq!(config.cache_ttl_seconds(), 24 * 3600);
    }

    #[test]
    fn test_require_brave_api_key_missing() {
        let config = AppConfig::default();
        let result = config.require_brave_api_key();
        assert!(matches!(result, Err(ConfigError::Missing { .. })));
    }

    #[test]
    fn test_require_brave_api_key_present() {
        let config = AppConfig { brave_api_key: Some("test-key".into()), ..Default::default() };
        let result = config.require_brave_api_key();
        assert_eq!(result.unwrap(), "test-key");
    }
}

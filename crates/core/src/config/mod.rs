//! Application configuration with layered loading.
//!
//! This module provides configuration management using figment for layered
//! configuration loading from multiple sources:
//!
//! 1. Environment variables (BOOKSHELF_*)
//! 2. TOML config file (if BOOKSHELF_CONFIG_FILE set)
//! 3. Built-in defaults

use std::time::Duration;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

use crate::SearchDefaults;

mod validation;

pub use validation::ConfigError;

/// Application configuration with layered loading.
///
/// Loading precedence (highest wins):
/// 1. Environment variables (BOOKSHELF_*)
/// 2. TOML config file (if BOOKSHELF_CONFIG_FILE set)
/// 3. Built-in defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Catalog volumes endpoint.
    ///
    /// Set via BOOKSHELF_CATALOG_URL environment variable.
    #[serde(default = "default_catalog_url")]
    pub catalog_url: String,

    /// Optional catalog API key, sent as the `key` query parameter.
    ///
    /// Set via BOOKSHELF_API_KEY environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Query used by `/api/books`, refresh, and searches without `q`.
    ///
    /// Set via BOOKSHELF_DEFAULT_QUERY environment variable.
    #[serde(default = "default_query")]
    pub default_query: String,

    /// Result limit used when a request omits or garbles `max_results`.
    ///
    /// Set via BOOKSHELF_DEFAULT_MAX_RESULTS environment variable.
    #[serde(default = "default_max_results")]
    pub default_max_results: u32,

    /// Catalog request timeout in milliseconds.
    ///
    /// Set via BOOKSHELF_TIMEOUT_MS environment variable.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// User-Agent string for catalog requests.
    ///
    /// Set via BOOKSHELF_USER_AGENT environment variable.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Address the HTTP server listens on.
    ///
    /// Set via BOOKSHELF_BIND_ADDR environment variable.
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_catalog_url() -> String {
    "https://www.googleapis.com/books/v1/volumes".into()
}

fn default_query() -> String {
    "trending books".into()
}

fn default_max_results() -> u32 {
    25
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_user_agent() -> String {
    "bookshelf/0.1".into()
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".into()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog_url: default_catalog_url(),
            api_key: None,
            default_query: default_query(),
            default_max_results: default_max_results(),
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            bind_addr: default_bind_addr(),
        }
    }
}

impl AppConfig {
    /// Timeout as Duration for use with reqwest/tokio.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Defaults applied to incoming search parameters.
    pub fn search_defaults(&self) -> SearchDefaults {
        SearchDefaults { query: self.default_query.clone(), max_results: self.default_max_results }
    }

    /// Load configuration from all sources with layered precedence.
    ///
    /// Priority (highest wins):
    /// 1. Environment variables prefixed with `BOOKSHELF_`
    /// 2. TOML file from `BOOKSHELF_CONFIG_FILE` (if set)
    /// 3. Built-in defaults via `Default::default()`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - Configuration file cannot be read
    /// - Environment variables cannot be parsed
    /// - Validation fails after loading
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment()
            .extract()
            .map_err(|e| ConfigError::LoadFailed(e.to_string()))?;

        config.validate()?;

        Ok(config)
    }

    fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Ok(config_path) = std::env::var("BOOKSHELF_CONFIG_FILE") {
            figment = figment.merge(Toml::file(&config_path));
        }

        figment.merge(
            Env::prefixed("BOOKSHELF_")
                .ignore(&["CONFIG_FILE"])
                .map(|key| key.as_str().to_lowercase().into())
                .split("__"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_url, "https://www.googleapis.com/books/v1/volumes");
        assert!(config.api_key.is_none());
        assert_eq!(config.default_query, "trending books");
        assert_eq!(config.default_max_results, 25);
        assert_eq!(config.timeout_ms, 10_000);
        assert_eq!(config.user_agent, "bookshelf/0.1");
        assert_eq!(config.bind_addr, "127.0.0.1:5000");
    }

    #[test]
    fn test_timeout_duration() {
        let config = AppConfig::default();
        assert_eq!(config.timeout(), Duration::from_millis(10_000));
    }

    #[test]
    fn test_search_defaults() {
        let config = AppConfig { default_query: "poetry".into(), default_max_results: 5, ..Default::default() };
        let defaults = config.search_defaults();
        assert_eq!(defaults.query, "poetry");
        assert_eq!(defaults.max_results, 5);
    }

    #[test]
    fn test_load_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BOOKSHELF_DEFAULT_QUERY", "science fiction");
            jail.set_env("BOOKSHELF_DEFAULT_MAX_RESULTS", "10");
            jail.set_env("BOOKSHELF_API_KEY", "secret");

            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.default_query, "science fiction");
            assert_eq!(config.default_max_results, 10);
            assert_eq!(config.api_key.as_deref(), Some("secret"));
            assert_eq!(config.timeout_ms, 10_000);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_toml_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "bookshelf.toml",
                r#"
                    default_query = "history"
                    bind_addr = "0.0.0.0:8080"
                "#,
            )?;
            jail.set_env("BOOKSHELF_CONFIG_FILE", "bookshelf.toml");
            jail.set_env("BOOKSHELF_DEFAULT_QUERY", "art");

            let config = AppConfig::load().expect("config should load");
            assert_eq!(config.default_query, "art");
            assert_eq!(config.bind_addr, "0.0.0.0:8080");
            Ok(())
        });
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("BOOKSHELF_DEFAULT_MAX_RESULTS", "0");

            let result = AppConfig::load();
            assert!(matches!(result, Err(ConfigError::Invalid { field, .. }) if field == "default_max_results"));
            Ok(())
        });
    }
}

//! Configuration validation rules.
//!
//! This module provides validation logic for `AppConfig` values
//! after they have been loaded from environment, files, or defaults.

use std::net::SocketAddr;

use crate::config::AppConfig;
use thiserror::Error;

/// Largest page size the catalog accepts.
const CATALOG_MAX_RESULTS: u32 = 40;

/// Configuration validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    LoadFailed(String),

    #[error("invalid configuration: {field} - {reason}")]
    Invalid { field: String, reason: String },
}

impl AppConfig {
    /// Validate configuration values after loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if:
    /// - `catalog_url` is not an http(s) URL
    /// - `default_query` or `user_agent` is empty
    /// - `default_max_results` is outside 1..=40
    /// - `timeout_ms` is less than 100ms or exceeds 5 minutes
    /// - `bind_addr` is not a socket address
    pub fn validate(&self) -> Result<(), ConfigError> {
        match url::Url::parse(&self.catalog_url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => {
                return Err(ConfigError::Invalid {
                    field: "catalog_url".into(),
                    reason: format!("unsupported scheme: {}", url.scheme()),
                });
            }
            Err(e) => {
                return Err(ConfigError::Invalid { field: "catalog_url".into(), reason: e.to_string() });
            }
        }

        if self.default_query.is_empty() {
            return Err(ConfigError::Invalid { field: "default_query".into(), reason: "must not be empty".into() });
        }

        if !(1..=CATALOG_MAX_RESULTS).contains(&self.default_max_results) {
            return Err(ConfigError::Invalid {
                field: "default_max_results".into(),
                reason: format!("must be between 1 and {CATALOG_MAX_RESULTS}"),
            });
        }

        if self.timeout_ms < 100 {
            return Err(ConfigError::Invalid { field: "timeout_ms".into(), reason: "must be at least 100ms".into() });
        }
        if self.timeout_ms > 300_000 {
            return Err(ConfigError::Invalid {
                field: "timeout_ms".into(),
                reason: "must not exceed 5 minutes (300000ms)".into(),
            });
        }

        if self.user_agent.is_empty() {
            return Err(ConfigError::Invalid { field: "user_agent".into(), reason: "must not be empty".into() });
        }

        if self.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(ConfigError::Invalid {
                field: "bind_addr".into(),
                reason: format!("not a socket address: {}", self.bind_addr),
            });
        }

        if self.api_key.as_deref().is_some_and(str::is_empty) {
            tracing::warn!("api_key is set but empty; catalog requests will be sent without a key");
        }

        Ok(())
    }
}

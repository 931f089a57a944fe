//! Search key resolution.
//!
//! Raw request parameters are resolved against the configured defaults before
//! they reach the cache, so `q=` and a missing `q` land on the same key.

use serde::{Deserialize, Serialize};

/// The (query, limit) pair that identifies one catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchKey {
    pub query: String,
    pub max_results: u32,
}

impl SearchKey {
    pub fn new(query: impl Into<String>, max_results: u32) -> Self {
        Self { query: query.into(), max_results }
    }
}

/// Fallback values used when a request leaves out or garbles a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchDefaults {
    pub query: String,
    pub max_results: u32,
}

impl SearchDefaults {
    /// The key used by `/api/books` and refresh.
    pub fn key(&self) -> SearchKey {
        SearchKey::new(self.query.clone(), self.max_results)
    }

    /// Resolve raw request parameters into a key.
    ///
    /// An empty query, or a limit that is missing, non-numeric or zero, falls
    /// back to the default. Negative limits are not forwarded to the catalog;
    /// they fail the unsigned parse and fall back the same way.
    pub fn resolve(&self, query: Option<&str>, max_results: Option<&str>) -> SearchKey {
        let query = match query {
            Some(q) if !q.is_empty() => q.to_string(),
            _ => self.query.clone(),
        };

        let max_results = max_results
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(self.max_results);

        SearchKey { query, max_results }
    }
}

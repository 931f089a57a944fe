//! Catalog search request parameters.

use bookshelf_core::SearchKey;
use serde::Serialize;

/// Query string sent to the volumes endpoint.
#[derive(Debug, Clone, Serialize, Default, PartialEq, Eq)]
pub struct SearchRequest {
    /// Free-text search term.
    pub q: String,

    /// Number of results to return.
    #[serde(rename = "maxResults")]
    pub max_results: u32,

    /// API key, when one is configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl SearchRequest {
    /// Build the request for a cache key, attaching a non-empty API key.
    pub fn for_key(key: &SearchKey, api_key: Option<&str>) -> Self {
        Self {
            q: key.query.clone(),
            max_results: key.max_results,
            key: api_key.filter(|k| !k.is_empty()).map(str::to_string),
        }
    }
}

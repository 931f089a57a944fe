//! Catalog client error types.

use std::sync::Arc;

use bookshelf_core::Error;

/// Errors from the book catalog client.
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    /// Catalog URL could not be parsed.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP error: {status}")]
    HttpError { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { CatalogError::Timeout } else { CatalogError::Network(Arc::new(err)) }
    }
}

impl From<CatalogError> for Error {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::InvalidUrl(msg) => Error::InvalidInput(msg),
            CatalogError::HttpError { status } => Error::CatalogHttp(format!("HTTP {}", status)),
            CatalogError::Timeout => Error::CatalogTimeout("request timeout".to_string()),
            CatalogError::Network(e) => Error::CatalogNetwork(e.to_string()),
            CatalogError::Parse(msg) => Error::CatalogParse(msg),
        }
    }
}

//! Unified error types for bookshelf.
//!
//! Catalog failures keep their kind here so callers can tell an unreachable
//! upstream apart from a search that simply matched nothing.

/// Unified error types for the bookshelf backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters.
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// The catalog did not answer within the configured timeout.
    #[error("CATALOG_TIMEOUT: {0}")]
    CatalogTimeout(String),

    /// Transport-level failure talking to the catalog.
    #[error("CATALOG_NETWORK: {0}")]
    CatalogNetwork(String),

    /// The catalog answered with a non-success status.
    #[error("CATALOG_HTTP_ERROR: {0}")]
    CatalogHttp(String),

    /// The catalog payload could not be decoded.
    #[error("CATALOG_PARSE: {0}")]
    CatalogParse(String),
}

impl Error {
    /// Whether the error means the catalog could not be used at all.
    pub fn is_upstream(&self) -> bool {
        !matches!(self, Error::InvalidInput(_))
    }
}

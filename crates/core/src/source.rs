//! The seam between the cache and whatever actually answers searches.

use async_trait::async_trait;

use crate::{Book, Error, SearchKey};

/// A backend that can answer a book search.
///
/// The catalog client is the production implementation; tests plug in
/// in-memory sources.
#[async_trait]
pub trait BookSource: Send + Sync {
    /// Run one search. Results keep the backend's ordering.
    async fn search(&self, key: &SearchKey) -> Result<Vec<Book>, Error>;
}

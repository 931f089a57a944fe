//! Single-slot lookup cache in front of a [`BookSource`].
//!
//! The cache remembers exactly one (key, result) pair: the most recent
//! cache-miss fetch. A failed fetch is remembered as an empty result, so a
//! down catalog is not asked again for the same key. A repeated identical key
//! is served from memory, any other key goes to the source and replaces the
//! pair. There is no expiry;
//! [`BookCache::invalidate`] is the only way to force a refetch of the same key.
//!
//! ### Concurrency
//!
//! The slot lock is held only to compare and to store, never across the
//! source call. Two concurrent misses both fetch and the last one to finish
//! owns the slot. A fetch that was in flight when [`BookCache::invalidate`]
//! ran does not store its result, so the lookup after an invalidation always
//! reaches the source.

mod slot;

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::{Book, BookSource, Error, SearchKey};
use slot::Slot;

/// Query-keyed single-entry cache.
pub struct BookCache {
    source: Arc<dyn BookSource>,
    slot: Mutex<Slot>,
}

impl BookCache {
    /// Create an empty cache over `source`.
    pub fn new(source: Arc<dyn BookSource>) -> Self {
        Self { source, slot: Mutex::new(Slot::empty()) }
    }

    /// Return the stored result for `key`, or fetch and store it.
    ///
    /// Hits hand back the same shared allocation that was stored. A source
    /// error stores an empty result under `key` and is then returned, so the
    /// next identical lookup is a hit.
    pub async fn lookup(&self, key: SearchKey) -> Result<Arc<[Book]>, Error> {
        let generation = {
            let slot = self.slot.lock().await;
            if let Some(books) = slot.get(&key) {
                tracing::debug!(
                    query = %key.query,
                    max_results = key.max_results,
                    fetched_at = ?slot.fetched_at,
                    "cache hit"
                );
                return Ok(books);
            }
            slot.generation
        };

        tracing::info!(query = %key.query, max_results = key.max_results, "cache miss, querying source");

        let (books, outcome): (Arc<[Book]>, Result<(), Error>) = match self.source.search(&key).await {
            Ok(books) => (books.into(), Ok(())),
            Err(e) => (Arc::from(Vec::new()), Err(e)),
        };

        let mut slot = self.slot.lock().await;
        if slot.generation == generation {
            slot.store(key, Arc::clone(&books));
        } else {
            tracing::debug!(query = %key.query, "slot invalidated during fetch, result not stored");
        }

        outcome.map(|()| books)
    }

    /// [`lookup`](Self::lookup) with source failures served as an empty result.
    ///
    /// This is the only place an unavailable catalog turns into "no books".
    pub async fn lookup_or_empty(&self, key: SearchKey) -> Arc<[Book]> {
        match self.lookup(key).await {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(error = %e, "book source unavailable, serving empty result");
                Arc::from(Vec::new())
            }
        }
    }

    /// Forget the stored key so the next lookup misses.
    pub async fn invalidate(&self) {
        let mut slot = self.slot.lock().await;
        slot.invalidate();
        tracing::info!(generation = slot.generation, "cache invalidated");
    }

    /// The key currently held, if any.
    pub async fn last_key(&self) -> Option<SearchKey> {
        self.slot.lock().await.key.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::ListPrice;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct CountingSource {
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingSource {
        fn ok() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), fail: false })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self { calls: AtomicUsize::new(0), fail: true })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl BookSource for CountingSource {
        async fn search(&self, key: &SearchKey) -> Result<Vec<Book>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(Error::CatalogNetwork("connection refused".into()));
            }
            Ok(vec![Book::new(Some(key.query.clone()), None, None, ListPrice::default(), None)])
        }
    }

    /// Blocks every search until released.
    struct GatedSource {
        calls: AtomicUsize,
        started: Notify,
        release: Notify,
    }

    #[async_trait]
    impl BookSource for GatedSource {
        async fn search(&self, _key: &SearchKey) -> Result<Vec<Book>, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.started.notify_one();
            self.release.notified().await;
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_repeated_key_hits() {
        let source = CountingSource::ok();
        let cache = BookCache::new(source.clone());
        let key = SearchKey::new("trending books", 25);

        let first = cache.lookup(key.clone()).await.unwrap();
        let second = cache.lookup(key.clone()).await.unwrap();

        assert_eq!(source.calls(), 1);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(cache.last_key().await, Some(key));
    }

    #[tokio::test]
    async fn test_new_key_replaces_slot() {
        let source = CountingSource::ok();
        let cache = BookCache::new(source.clone());

        cache.lookup(SearchKey::new("dune", 10)).await.unwrap();
        let emma = cache.lookup(SearchKey::new("emma", 10)).await.unwrap();
        assert_eq!(emma[0].title, "emma");
        assert_eq!(cache.last_key().await, Some(SearchKey::new("emma", 10)));

        cache.lookup(SearchKey::new("dune", 10)).await.unwrap();
        assert_eq!(source.calls(), 3);
    }

    #[tokio::test]
    async fn test_limit_is_part_of_key() {
        let source = CountingSource::ok();
        let cache = BookCache::new(source.clone());

        cache.lookup(SearchKey::new("dune", 10)).await.unwrap();
        cache.lookup(SearchKey::new("dune", 20)).await.unwrap();
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_invalidate_forces_refetch() {
        let source = CountingSource::ok();
        let cache = BookCache::new(source.clone());
        let key = SearchKey::new("dune", 10);

        cache.lookup(key.clone()).await.unwrap();
        cache.invalidate().await;
        assert_eq!(cache.last_key().await, None);

        cache.lookup(key.clone()).await.unwrap();
        assert_eq!(source.calls(), 2);
        assert_eq!(cache.last_key().await, Some(key));
    }

    #[tokio::test]
    async fn test_invalidate_on_empty_cache() {
        let source = CountingSource::ok();
        let cache = BookCache::new(source.clone());

        cache.invalidate().await;
        cache.lookup(SearchKey::new("dune", 10)).await.unwrap();
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_cached_as_empty() {
        let source = CountingSource::failing();
        let cache = BookCache::new(source.clone());
        let key = SearchKey::new("dune", 10);

        let err = cache.lookup(key.clone()).await.unwrap_err();
        assert!(err.is_upstream());
        assert_eq!(cache.last_key().await, Some(key.clone()));

        let cached = cache.lookup(key.clone()).await.unwrap();
        assert!(cached.is_empty());
        assert_eq!(source.calls(), 1);
    }

    #[tokio::test]
    async fn test_repeated_lookup_or_empty_with_source_down() {
        let source = CountingSource::failing();
        let cache = BookCache::new(source.clone());
        let key = SearchKey::new("dune", 10);

        assert!(cache.lookup_or_empty(key.clone()).await.is_empty());
        assert!(cache.lookup_or_empty(key.clone()).await.is_empty());
        assert_eq!(source.calls(), 1);
        assert_eq!(cache.last_key().await, Some(key));
    }

    #[tokio::test]
    async fn test_invalidate_after_failure_refetches() {
        let source = CountingSource::failing();
        let cache = BookCache::new(source.clone());
        let key = SearchKey::new("dune", 10);

        cache.lookup_or_empty(key.clone()).await;
        cache.invalidate().await;
        cache.lookup_or_empty(key).await;
        assert_eq!(source.calls(), 2);
    }

    #[tokio::test]
    async fn test_lookup_or_empty_collapses_errors() {
        let cache = BookCache::new(CountingSource::failing());
        let books = cache.lookup_or_empty(SearchKey::new("dune", 10)).await;
        assert!(books.is_empty());
    }

    #[tokio::test]
    async fn test_invalidate_during_fetch_discards_result() {
        let source =
            Arc::new(GatedSource { calls: AtomicUsize::new(0), started: Notify::new(), release: Notify::new() });
        let cache = Arc::new(BookCache::new(source.clone()));
        let key = SearchKey::new("dune", 10);

        let pending = tokio::spawn({
            let cache = Arc::clone(&cache);
            let key = key.clone();
            async move { cache.lookup(key).await }
        });

        source.started.notified().await;
        cache.invalidate().await;
        source.release.notify_one();
        pending.await.unwrap().unwrap();

        assert_eq!(cache.last_key().await, None);

        source.release.notify_one();
        cache.lookup(key.clone()).await.unwrap();
        assert_eq!(source.calls.load(Ordering::SeqCst), 2);
        assert_eq!(cache.last_key().await, Some(key));
    }
}

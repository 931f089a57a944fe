//! The single key/result pair held by [`BookCache`](super::BookCache).

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::{Book, SearchKey};

/// One cached lookup. A new key replaces the whole pair.
#[derive(Debug)]
pub(crate) struct Slot {
    pub(crate) key: Option<SearchKey>,
    pub(crate) books: Arc<[Book]>,
    pub(crate) fetched_at: Option<DateTime<Utc>>,
    /// Bumped on every invalidation.
    pub(crate) generation: u64,
}

impl Slot {
    pub(crate) fn empty() -> Self {
        Self { key: None, books: Arc::from(Vec::new()), fetched_at: None, generation: 0 }
    }

    /// The stored result, if it was stored under `key`.
    pub(crate) fn get(&self, key: &SearchKey) -> Option<Arc<[Book]>> {
        match &self.key {
            Some(stored) if stored == key => Some(Arc::clone(&self.books)),
            _ => None,
        }
    }

    pub(crate) fn store(&mut self, key: SearchKey, books: Arc<[Book]>) {
        self.key = Some(key);
        self.books = books;
        self.fetched_at = Some(Utc::now());
    }

    /// Forget the key. The stale result stays until the next store.
    pub(crate) fn invalidate(&mut self) {
        self.key = None;
        self.generation = self.generation.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot_misses() {
        let slot = Slot::empty();
        assert!(slot.get(&SearchKey::new("dune", 10)).is_none());
        assert!(slot.fetched_at.is_none());
    }

    #[test]
    fn test_store_replaces_pair() {
        let mut slot = Slot::empty();
        slot.store(SearchKey::new("dune", 10), Arc::from(Vec::new()));
        slot.store(SearchKey::new("emma", 10), Arc::from(Vec::new()));

        assert!(slot.get(&SearchKey::new("dune", 10)).is_none());
        assert!(slot.get(&SearchKey::new("emma", 10)).is_some());
        assert!(slot.fetched_at.is_some());
    }

    #[test]
    fn test_invalidate_clears_key_and_bumps_generation() {
        let mut slot = Slot::empty();
        slot.store(SearchKey::new("dune", 10), Arc::from(Vec::new()));
        slot.invalidate();

        assert!(slot.key.is_none());
        assert!(slot.get(&SearchKey::new("dune", 10)).is_none());
        assert_eq!(slot.generation, 1);
    }
}

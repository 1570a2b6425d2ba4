use std::time::SystemTime;

use crate::models::{CachedSearchResults, CardOffer, SearchError};

pub mod in_memory;

pub use in_memory::InMemorySearchCache;

pub type PersistenceResult<T> = Result<T, SearchError>;

/// Result-set cache keyed by the normalized query string. Readers decide
/// freshness; the store never expires entries on its own.
pub trait SearchCacheStore: Send + Sync {
    fn store(
        &self,
        normalized_query: &str,
        results: &[CardOffer],
        cached_at: SystemTime,
    ) -> PersistenceResult<()>;

    fn lookup(&self, normalized_query: &str) -> PersistenceResult<Option<CachedSearchResults>>;
}

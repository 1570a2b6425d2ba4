use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::SystemTime;

use crate::models::{
    CachedSearchResults, CardOffer, SearchError, SearchErrorKind, SearchTier,
};
use crate::persistence::{PersistenceResult, SearchCacheStore};

/// Process-local cache. Concurrent callers racing on one key may both
/// recompute and overwrite; last writer wins, entries are idempotent
/// snapshots.
#[derive(Default)]
pub struct InMemorySearchCache {
    entries: Mutex<HashMap<String, CachedSearchResults>>,
}

impl InMemorySearchCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_entries(&self) -> PersistenceResult<MutexGuard<'_, HashMap<String, CachedSearchResults>>> {
        self.entries.lock().map_err(|_| SearchError {
            provider: None,
            tier: Some(SearchTier::Cache),
            kind: SearchErrorKind::StorageFailure,
            message: "search cache mutex poisoned".to_string(),
        })
    }
}

impl SearchCacheStore for InMemorySearchCache {
    fn store(
        &self,
        normalized_query: &str,
        results: &[CardOffer],
        cached_at: SystemTime,
    ) -> PersistenceResult<()> {
        let mut entries = self.lock_entries()?;
        entries.insert(
            normalized_query.to_string(),
            CachedSearchResults {
                results: results.to_vec(),
                cached_at,
            },
        );
        Ok(())
    }

    fn lookup(&self, normalized_query: &str) -> PersistenceResult<Option<CachedSearchResults>> {
        Ok(self.lock_entries()?.get(normalized_query).cloned())
    }
}

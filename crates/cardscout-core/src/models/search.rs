use std::time::{Duration, SystemTime};

use crate::models::CardOffer;

/// How long a cached result set stays servable for repeat queries.
pub const CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SearchTier {
    Cache,
    LiveSearch,
    Catalog,
    Synthesized,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchQuery {
    pub text: String,
    pub issued_at: SystemTime,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            issued_at: SystemTime::now(),
        }
    }

    /// Cache key form: trimmed and lower-cased.
    pub fn normalized(&self) -> String {
        self.text.trim().to_lowercase()
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CachedSearchResults {
    pub results: Vec<CardOffer>,
    pub cached_at: SystemTime,
}

impl CachedSearchResults {
    /// Stale entries are treated as absent by readers, never deleted.
    /// An entry stamped in the future (clock skew) counts as fresh.
    pub fn is_fresh(&self, now: SystemTime) -> bool {
        match now.duration_since(self.cached_at) {
            Ok(age) => age < CACHE_TTL,
            Err(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::UNIX_EPOCH;

    use super::*;

    #[test]
    fn normalizes_to_trimmed_lowercase() {
        let query = SearchQuery {
            text: "  Platinum Rewards ".to_string(),
            issued_at: UNIX_EPOCH,
        };
        assert_eq!(query.normalized(), "platinum rewards");
    }

    #[test]
    fn entry_goes_stale_after_ttl() {
        let cached_at = UNIX_EPOCH + Duration::from_secs(1_750_000_000);
        let entry = CachedSearchResults {
            results: Vec::new(),
            cached_at,
        };
        assert!(entry.is_fresh(cached_at + CACHE_TTL - Duration::from_secs(1)));
        assert!(!entry.is_fresh(cached_at + CACHE_TTL));
        assert!(entry.is_fresh(cached_at - Duration::from_secs(60)));
    }
}

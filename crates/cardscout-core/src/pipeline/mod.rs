use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{CatalogTier, CuratedCatalog};
use crate::models::{
    CardOffer, SearchError, SearchErrorKind, SearchProgress, SearchQuery, SearchStatus,
    SearchTier,
};
use crate::persistence::SearchCacheStore;
use crate::providers::SearchProvider;
use crate::providers::extract;

pub mod dedupe;
pub mod fallback;
pub mod query_plan;
pub(crate) mod simulated;

pub use dedupe::dedupe_offers;
pub use fallback::{MajorBankFallback, SynthesizedTier};
pub use query_plan::{MAX_PLANNED_QUERIES, PlannedQuery, build_query_plan};

/// Politeness delay between successive calls to the same provider.
pub const PROVIDER_CALL_DELAY: Duration = Duration::from_secs(1);
/// Results requested from a provider per planned query.
const RESULTS_PER_QUERY: usize = 5;
/// The secondary provider runs when the primary produced fewer offers.
const SECONDARY_TRIGGER_THRESHOLD: usize = 5;

pub type ProgressFn = dyn Fn(&SearchProgress) + Send + Sync;

/// Pause seam for the inter-call delay, replaceable in tests.
pub trait Throttle: Send + Sync {
    fn pause(&self, duration: Duration);
}

pub struct ThreadSleepThrottle;

impl Throttle for ThreadSleepThrottle {
    fn pause(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// The tier cascade behind every card search: cache, then live (or
/// simulated) web search, then the curated catalog, then synthesized
/// offers. Constructed once by the application and shared by handle.
pub struct SearchPipeline {
    cache: Arc<dyn SearchCacheStore>,
    primary: Option<Arc<dyn SearchProvider>>,
    secondary: Option<Arc<dyn SearchProvider>>,
    catalog: Arc<dyn CatalogTier>,
    synthesized: Arc<dyn SynthesizedTier>,
    throttle: Arc<dyn Throttle>,
    rng: Mutex<ChaCha8Rng>,
}

impl SearchPipeline {
    pub fn new(
        cache: Arc<dyn SearchCacheStore>,
        primary: Option<Arc<dyn SearchProvider>>,
        secondary: Option<Arc<dyn SearchProvider>>,
    ) -> Self {
        Self {
            cache,
            primary,
            secondary,
            catalog: Arc::new(CuratedCatalog),
            synthesized: Arc::new(MajorBankFallback),
            throttle: Arc::new(ThreadSleepThrottle),
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(rand::random())),
        }
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogTier>) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_synthesized(mut self, synthesized: Arc<dyn SynthesizedTier>) -> Self {
        self.synthesized = synthesized;
        self
    }

    pub fn with_throttle(mut self, throttle: Arc<dyn Throttle>) -> Self {
        self.throttle = throttle;
        self
    }

    /// Fixes the simulated tier's RNG so repeated runs produce identical
    /// offers.
    pub fn with_rng_seed(self, seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
            ..self
        }
    }

    /// Runs the cascade for `query`. Never fails outward: when every tier
    /// fails the return value is a single placeholder offer spanning
    /// "Multiple Banks".
    pub fn search(&self, query: &SearchQuery, progress: Option<&ProgressFn>) -> Vec<CardOffer> {
        match self.run_cascade(query, progress) {
            Ok(results) => results,
            Err(error) => {
                tracing::error!(
                    query = %query.text,
                    error = %error,
                    "all search tiers failed, returning placeholder offer"
                );
                emit(
                    progress,
                    SearchProgress {
                        completed: 0,
                        total: 0,
                        current_bank: String::new(),
                        status: SearchStatus::Error,
                    },
                );
                vec![fallback::placeholder_offer(query)]
            }
        }
    }

    fn run_cascade(
        &self,
        query: &SearchQuery,
        progress: Option<&ProgressFn>,
    ) -> Result<Vec<CardOffer>, SearchError> {
        let normalized = query.normalized();

        match self.cache.lookup(&normalized) {
            Ok(Some(entry)) if entry.is_fresh(query.issued_at) => {
                emit_completed(progress, entry.results.len());
                return Ok(entry.results);
            }
            // A stale or missing entry falls through to the data tiers.
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(error = %error, "cache lookup failed, continuing without cache");
            }
        }

        let mut first_failure: Option<SearchError> = None;

        match self.live_search(query, progress) {
            Ok(results) if !results.is_empty() => {
                return Ok(self.finish(&normalized, query, results, progress));
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(error = %error, "live search tier failed");
                first_failure.get_or_insert(error);
            }
        }

        emit_tier_start(progress);
        match self.catalog.matches(query) {
            Ok(results) if !results.is_empty() => {
                return Ok(self.finish(&normalized, query, results, progress));
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(error = %error, "catalog tier failed");
                first_failure.get_or_insert(error);
            }
        }

        emit_tier_start(progress);
        match self.synthesized.fabricate(query) {
            Ok(results) if !results.is_empty() => {
                return Ok(self.finish(&normalized, query, results, progress));
            }
            Ok(_) => {}
            Err(error) => {
                tracing::warn!(error = %error, "synthesized tier failed");
                first_failure.get_or_insert(error);
            }
        }

        Err(first_failure.unwrap_or_else(|| SearchError {
            provider: None,
            tier: None,
            kind: SearchErrorKind::Internal,
            message: "every search tier returned no results".to_string(),
        }))
    }

    /// Tier 2. Real providers when at least one is configured, the
    /// simulated walk over known banks otherwise. Output is deduplicated
    /// before the cascade judges emptiness.
    fn live_search(
        &self,
        query: &SearchQuery,
        progress: Option<&ProgressFn>,
    ) -> Result<Vec<CardOffer>, SearchError> {
        let primary = self
            .primary
            .as_deref()
            .filter(|provider| provider.is_configured());
        let secondary = self
            .secondary
            .as_deref()
            .filter(|provider| provider.is_configured());

        if primary.is_none() && secondary.is_none() {
            let mut rng = self.rng.lock().map_err(|_| SearchError {
                provider: None,
                tier: Some(SearchTier::LiveSearch),
                kind: SearchErrorKind::Internal,
                message: "simulated search rng mutex poisoned".to_string(),
            })?;
            let offers = simulated::simulated_search(&mut *rng, query, progress);
            return Ok(dedupe_offers(offers));
        }

        let plan = build_query_plan(query.text.trim());
        let mut collected = Vec::new();

        if let Some(provider) = primary {
            collected.extend(self.run_provider(provider, &plan, progress));
        }
        if collected.len() < SECONDARY_TRIGGER_THRESHOLD {
            if let Some(provider) = secondary {
                collected.extend(self.run_provider(provider, &plan, progress));
            }
        }

        Ok(dedupe_offers(collected))
    }

    /// Issues this provider's share of the plan one query at a time.
    /// Failed calls are logged and skipped; the remaining queries in the
    /// tier still run.
    fn run_provider(
        &self,
        provider: &dyn SearchProvider,
        plan: &[PlannedQuery],
        progress: Option<&ProgressFn>,
    ) -> Vec<CardOffer> {
        let descriptor = provider.descriptor();
        let share = descriptor.query_cap.min(plan.len());
        let mut offers = Vec::new();

        for (index, planned) in plan[..share].iter().enumerate() {
            if index > 0 {
                self.throttle.pause(PROVIDER_CALL_DELAY);
            }
            emit(
                progress,
                SearchProgress {
                    completed: index,
                    total: share,
                    current_bank: planned.bank.to_string(),
                    status: SearchStatus::Searching,
                },
            );

            match provider.fetch(&planned.text, RESULTS_PER_QUERY) {
                Ok(items) => {
                    emit(
                        progress,
                        SearchProgress {
                            completed: index,
                            total: share,
                            current_bank: planned.bank.to_string(),
                            status: SearchStatus::Parsing,
                        },
                    );
                    for item in &items {
                        offers.push(extract::offer_from_item(
                            item,
                            descriptor.id,
                            offers.len(),
                        ));
                    }
                }
                Err(error) if error.kind == SearchErrorKind::CredentialsMissing => {
                    tracing::debug!(
                        provider = descriptor.display_name,
                        "provider not configured, skipping its queries"
                    );
                    break;
                }
                Err(error) => {
                    tracing::warn!(
                        provider = descriptor.display_name,
                        error = %error,
                        "provider call failed, continuing with remaining queries"
                    );
                }
            }
        }

        offers
    }

    /// Caches a winning non-empty result set and reports completion. A
    /// failed cache write is logged; the results are still returned.
    fn finish(
        &self,
        normalized: &str,
        query: &SearchQuery,
        results: Vec<CardOffer>,
        progress: Option<&ProgressFn>,
    ) -> Vec<CardOffer> {
        if let Err(error) = self.cache.store(normalized, &results, query.issued_at) {
            tracing::warn!(error = %error, "failed to cache search results");
        }
        emit_completed(progress, results.len());
        results
    }
}

pub(crate) fn emit(progress: Option<&ProgressFn>, snapshot: SearchProgress) {
    if let Some(callback) = progress {
        callback(&snapshot);
    }
}

fn emit_tier_start(progress: Option<&ProgressFn>) {
    emit(
        progress,
        SearchProgress {
            completed: 0,
            total: 0,
            current_bank: String::new(),
            status: SearchStatus::Searching,
        },
    );
}

fn emit_completed(progress: Option<&ProgressFn>, result_count: usize) {
    emit(
        progress,
        SearchProgress {
            completed: result_count,
            total: result_count,
            current_bank: String::new(),
            status: SearchStatus::Completed,
        },
    );
}

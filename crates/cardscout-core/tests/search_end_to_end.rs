use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use cardscout_core::catalog::CatalogTier;
use cardscout_core::models::{
    CardKind, CardOffer, DISPLAY_CARDHOLDER, DISPLAY_EXPIRY, DISPLAY_LAST_FOUR, OfferSource,
    ProviderDescriptor, ProviderId, SearchError, SearchErrorKind, SearchProgress, SearchQuery,
    SearchStatus, SearchTier,
};
use cardscout_core::persistence::{InMemorySearchCache, PersistenceResult, SearchCacheStore};
use cardscout_core::pipeline::{ProgressFn, SearchPipeline, SynthesizedTier, Throttle};
use cardscout_core::providers::{ProviderItem, ProviderResult, SearchProvider};
use cardscout_core::registry;

const BASE_SECS: u64 = 1_750_000_000;

fn query_at(text: &str, hours_later: u64) -> SearchQuery {
    SearchQuery {
        text: text.to_string(),
        issued_at: UNIX_EPOCH + Duration::from_secs(BASE_SECS + hours_later * 3600),
    }
}

fn item(title: &str, snippet: &str, link: &str) -> ProviderItem {
    ProviderItem {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
    }
}

fn canned_offer(id: &str, name: &str, bank: &str, source: OfferSource) -> CardOffer {
    CardOffer {
        id: id.to_string(),
        name: name.to_string(),
        kind: CardKind::Credit,
        bank: bank.to_string(),
        last_four_digits: DISPLAY_LAST_FOUR.to_string(),
        expiry_date: DISPLAY_EXPIRY.to_string(),
        cardholder_name: DISPLAY_CARDHOLDER.to_string(),
        description: String::new(),
        image_url: None,
        source,
        search_url: None,
        snippet: None,
        fees: None,
        benefits: Vec::new(),
        eligibility: None,
    }
}

struct StubProvider {
    descriptor: ProviderDescriptor,
    configured: bool,
    items: Vec<ProviderItem>,
    fail: bool,
    calls: AtomicUsize,
}

impl StubProvider {
    fn primary(items: Vec<ProviderItem>) -> Self {
        Self {
            descriptor: ProviderDescriptor {
                id: ProviderId::GoogleCustomSearch,
                display_name: "stub-primary",
                query_cap: 2,
            },
            configured: true,
            items,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn secondary(items: Vec<ProviderItem>) -> Self {
        Self {
            descriptor: ProviderDescriptor {
                id: ProviderId::BingWebSearch,
                display_name: "stub-secondary",
                query_cap: 1,
            },
            configured: true,
            items,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn unconfigured() -> Self {
        let mut stub = Self::primary(Vec::new());
        stub.configured = false;
        stub
    }

    fn failing() -> Self {
        let mut stub = Self::primary(Vec::new());
        stub.fail = true;
        stub
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SearchProvider for StubProvider {
    fn descriptor(&self) -> &ProviderDescriptor {
        &self.descriptor
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn fetch(&self, _query_text: &str, _max_results: usize) -> ProviderResult<Vec<ProviderItem>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SearchError {
                provider: Some(self.descriptor.id),
                tier: Some(SearchTier::LiveSearch),
                kind: SearchErrorKind::HttpFailure,
                message: "stub provider forced to fail".to_string(),
            });
        }
        Ok(self.items.clone())
    }
}

struct SpyCatalog {
    offers: Vec<CardOffer>,
    fail: bool,
    calls: AtomicUsize,
}

impl SpyCatalog {
    fn with_offers(offers: Vec<CardOffer>) -> Self {
        Self {
            offers,
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    fn failing() -> Self {
        Self {
            offers: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl CatalogTier for SpyCatalog {
    fn matches(&self, _query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SearchError {
                provider: None,
                tier: Some(SearchTier::Catalog),
                kind: SearchErrorKind::Internal,
                message: "spy catalog forced to fail".to_string(),
            });
        }
        Ok(self.offers.clone())
    }
}

struct SpySynthesized {
    offers: Vec<CardOffer>,
    fail: bool,
    calls: AtomicUsize,
}

impl SpySynthesized {
    fn failing() -> Self {
        Self {
            offers: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SynthesizedTier for SpySynthesized {
    fn fabricate(&self, _query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(SearchError {
                provider: None,
                tier: Some(SearchTier::Synthesized),
                kind: SearchErrorKind::Internal,
                message: "spy synthesized tier forced to fail".to_string(),
            });
        }
        Ok(self.offers.clone())
    }
}

struct NoThrottle;

impl Throttle for NoThrottle {
    fn pause(&self, _duration: Duration) {}
}

struct FailingCache;

impl SearchCacheStore for FailingCache {
    fn store(
        &self,
        _normalized_query: &str,
        _results: &[CardOffer],
        _cached_at: SystemTime,
    ) -> PersistenceResult<()> {
        Err(storage_error())
    }

    fn lookup(
        &self,
        _normalized_query: &str,
    ) -> PersistenceResult<Option<cardscout_core::models::CachedSearchResults>> {
        Err(storage_error())
    }
}

fn storage_error() -> SearchError {
    SearchError {
        provider: None,
        tier: Some(SearchTier::Cache),
        kind: SearchErrorKind::StorageFailure,
        message: "failing cache store".to_string(),
    }
}

fn regalia_item() -> ProviderItem {
    item(
        "HDFC Regalia Gold Credit Card - Apply Online",
        "Premium lifestyle card with lounge access.",
        "https://www.hdfcbank.com/personal/pay/cards/credit-cards/regalia-gold",
    )
}

#[test]
fn live_tier_short_circuits_the_catalog_tier() {
    let primary = Arc::new(StubProvider::primary(vec![regalia_item()]));
    let catalog = Arc::new(SpyCatalog::with_offers(vec![canned_offer(
        "db-00",
        "Should Not Appear",
        "Nowhere Bank",
        OfferSource::Database,
    )]));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        None,
    )
    .with_catalog(catalog.clone())
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("regalia", 0), None);

    assert!(!results.is_empty());
    assert_eq!(results[0].source, OfferSource::RealTimeSearch);
    assert_eq!(catalog.calls(), 0);
    // The stub's whole query share ran.
    assert_eq!(primary.calls(), 2);
}

#[test]
fn repeat_query_within_ttl_is_served_from_the_cache() {
    let primary = Arc::new(StubProvider::primary(vec![regalia_item()]));
    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        None,
    )
    .with_throttle(Arc::new(NoThrottle));

    let first = pipeline.search(&query_at("Platinum", 0), None);
    let calls_after_first = primary.calls();

    let second = pipeline.search(&query_at("Platinum", 1), None);

    assert_eq!(first, second);
    assert_eq!(primary.calls(), calls_after_first);
}

#[test]
fn stale_cache_entry_reruns_the_cascade() {
    let primary = Arc::new(StubProvider::primary(vec![regalia_item()]));
    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        None,
    )
    .with_throttle(Arc::new(NoThrottle));

    pipeline.search(&query_at("platinum", 0), None);
    let calls_after_first = primary.calls();

    pipeline.search(&query_at("platinum", 25), None);

    assert!(primary.calls() > calls_after_first);
}

#[test]
fn unconfigured_providers_fall_back_to_simulated_search() {
    let primary = Arc::new(StubProvider::unconfigured());
    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        None,
    )
    .with_rng_seed(7);

    let results = pipeline.search(&query_at("platinum", 0), None);

    assert!(!results.is_empty());
    assert_eq!(primary.calls(), 0);
    assert!(
        results
            .iter()
            .all(|offer| offer.source == OfferSource::RealTimeSearch)
    );
}

#[test]
fn simulated_search_is_deterministic_for_a_fixed_seed() {
    let build = || {
        SearchPipeline::new(Arc::new(InMemorySearchCache::new()), None, None).with_rng_seed(7)
    };
    let first = build().search(&query_at("travel", 0), None);
    let second = build().search(&query_at("travel", 0), None);
    assert_eq!(first, second);
}

#[test]
fn empty_live_results_fall_through_to_the_catalog() {
    let primary = Arc::new(StubProvider::primary(Vec::new()));
    let catalog_offer = canned_offer(
        "db-01",
        "Coral Credit Card",
        "ICICI Bank",
        OfferSource::Database,
    );
    let catalog = Arc::new(SpyCatalog::with_offers(vec![catalog_offer.clone()]));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary),
        None,
    )
    .with_catalog(catalog.clone())
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("coral", 0), None);

    assert_eq!(results, vec![catalog_offer]);
    assert_eq!(catalog.calls(), 1);
}

#[test]
fn empty_catalog_falls_through_to_synthesized_offers() {
    let primary = Arc::new(StubProvider::primary(Vec::new()));
    let catalog = Arc::new(SpyCatalog::with_offers(Vec::new()));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary),
        None,
    )
    .with_catalog(catalog)
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("obscure query", 0), None);

    assert_eq!(results.len(), registry::major_banks().count());
    for offer in &results {
        assert_eq!(offer.source, OfferSource::AiGenerated);
        assert_eq!(offer.name, "obscure query");
    }
}

#[test]
fn every_tier_failing_returns_the_multiple_banks_placeholder() {
    let pipeline = SearchPipeline::new(
        Arc::new(FailingCache),
        Some(Arc::new(StubProvider::failing())),
        None,
    )
    .with_catalog(Arc::new(SpyCatalog::failing()))
    .with_synthesized(Arc::new(SpySynthesized::failing()))
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("Anything", 0), None);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].bank, "Multiple Banks");
    assert_eq!(results[0].name, "Anything");
}

#[test]
fn duplicate_live_results_collapse_to_one_offer() {
    let primary = Arc::new(StubProvider::primary(vec![
        item(
            "ICICI Coral Credit Card",
            "",
            "https://www.icicibank.com/coral",
        ),
        item(
            "icici CORAL credit card",
            "",
            "https://www.icicibank.com/coral-lp",
        ),
    ]));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary),
        None,
    )
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("coral", 0), None);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].name, "ICICI Coral Credit Card");
}

#[test]
fn primary_with_enough_results_skips_the_secondary() {
    let items: Vec<ProviderItem> = ["Regalia", "Millennia", "MoneyBack", "Infinia", "Freedom"]
        .iter()
        .map(|name| {
            item(
                &format!("HDFC {name} Credit Card"),
                "",
                "https://www.hdfcbank.com/cards",
            )
        })
        .collect();
    let mut primary = StubProvider::primary(items);
    primary.descriptor.query_cap = 1;
    let primary = Arc::new(primary);
    let secondary = Arc::new(StubProvider::secondary(vec![regalia_item()]));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        Some(secondary.clone()),
    )
    .with_throttle(Arc::new(NoThrottle));

    pipeline.search(&query_at("hdfc", 0), None);

    assert_eq!(primary.calls(), 1);
    assert_eq!(secondary.calls(), 0);
}

#[test]
fn sparse_primary_results_trigger_the_secondary() {
    let primary = Arc::new(StubProvider::primary(vec![regalia_item()]));
    let secondary = Arc::new(StubProvider::secondary(vec![item(
        "SBI Card ELITE | Premium Credit Card",
        "",
        "https://www.sbicard.com/elite",
    )]));

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(primary.clone()),
        Some(secondary.clone()),
    )
    .with_throttle(Arc::new(NoThrottle));

    let results = pipeline.search(&query_at("premium", 0), None);

    assert_eq!(secondary.calls(), 1);
    assert!(results.iter().any(|offer| offer.bank == "SBI Card"));
}

#[test]
fn search_never_returns_an_empty_list() {
    for text in ["", "platinum", "zzz qqq unmatched"] {
        let pipeline =
            SearchPipeline::new(Arc::new(InMemorySearchCache::new()), None, None)
                .with_rng_seed(3);
        let results = pipeline.search(&query_at(text, 0), None);
        assert!(!results.is_empty(), "query {text:?} produced no results");
    }
}

#[test]
fn cache_write_failure_does_not_drop_results() {
    let pipeline =
        SearchPipeline::new(Arc::new(FailingCache), None, None).with_rng_seed(5);
    let results = pipeline.search(&query_at("cashback", 0), None);
    assert!(!results.is_empty());
}

#[test]
fn progress_observer_sees_per_bank_steps_and_completion() {
    let pipeline =
        SearchPipeline::new(Arc::new(InMemorySearchCache::new()), None, None).with_rng_seed(9);

    let snapshots: Arc<std::sync::Mutex<Vec<SearchProgress>>> =
        Arc::new(std::sync::Mutex::new(Vec::new()));
    let snapshots_for_observer = Arc::clone(&snapshots);
    let observer = move |snapshot: &SearchProgress| {
        snapshots_for_observer.lock().unwrap().push(snapshot.clone());
    };
    let observer_ref: &ProgressFn = &observer;

    pipeline.search(&query_at("rewards", 0), Some(observer_ref));

    let snapshots = snapshots.lock().unwrap().clone();
    let first_bank = registry::banks()[0].display_name;
    assert!(
        snapshots
            .iter()
            .any(|snapshot| snapshot.status == SearchStatus::Searching
                && snapshot.current_bank == first_bank)
    );
    assert_eq!(snapshots.last().unwrap().status, SearchStatus::Completed);
}

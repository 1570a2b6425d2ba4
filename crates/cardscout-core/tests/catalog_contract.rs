use std::collections::HashSet;
use std::time::UNIX_EPOCH;

use cardscout_core::catalog::{CatalogTier, CuratedCatalog, catalog_cards};
use cardscout_core::models::{OfferSource, SearchQuery};

fn query(text: &str) -> SearchQuery {
    SearchQuery {
        text: text.to_string(),
        issued_at: UNIX_EPOCH,
    }
}

#[test]
fn save_also_surfaces_the_simply_family() {
    let offers = CuratedCatalog.matches(&query("save")).unwrap();

    // Plain containment finds SimplySAVE; the synonym rule must add
    // SimplyCLICK as well.
    assert!(offers.iter().any(|offer| offer.name.contains("SimplySAVE")));
    assert!(offers.iter().any(|offer| offer.name.contains("SimplyCLICK")));
}

#[test]
fn both_millennia_spellings_match_the_same_card() {
    // The filter keeps two near-identical synonym branches for the two
    // spellings; they must stay interchangeable.
    let misspelled = CuratedCatalog.matches(&query("millenia")).unwrap();
    let spelled = CuratedCatalog.matches(&query("millennia")).unwrap();

    assert_eq!(misspelled, spelled);
    assert!(misspelled.iter().any(|offer| offer.name.contains("Millennia")));
}

#[test]
fn bank_tokens_match_catalog_entries() {
    let offers = CuratedCatalog.matches(&query("kotak")).unwrap();
    assert!(!offers.is_empty());
    assert!(offers.iter().all(|offer| offer.bank == "Kotak Mahindra Bank"));
}

#[test]
fn broad_queries_are_capped_at_twenty_matches() {
    // Every catalog entry's name contains "Card".
    let offers = CuratedCatalog.matches(&query("card")).unwrap();
    assert_eq!(offers.len(), 20);
}

#[test]
fn queries_without_usable_tokens_return_the_first_ten_entries() {
    let offers = CuratedCatalog.matches(&query("a an of")).unwrap();
    assert_eq!(offers.len(), 10);

    let blank = CuratedCatalog.matches(&query("   ")).unwrap();
    assert_eq!(blank.len(), 10);
}

#[test]
fn catalog_offers_are_tagged_as_database_entries() {
    for offer in CuratedCatalog.matches(&query("cashback")).unwrap() {
        assert_eq!(offer.source, OfferSource::Database);
        assert!(offer.fees.is_some());
        assert!(!offer.benefits.is_empty());
    }
}

#[test]
fn catalog_entries_have_unique_name_bank_pairs() {
    let mut seen = HashSet::new();
    for card in catalog_cards() {
        let key = format!("{}-{}", card.name.to_lowercase(), card.bank.to_lowercase());
        assert!(seen.insert(key), "duplicate catalog entry {}", card.name);
    }
}

#[test]
fn unmatched_tokens_yield_no_catalog_entries() {
    let offers = CuratedCatalog.matches(&query("zzz qqq unmatched")).unwrap();
    assert!(offers.is_empty());
}

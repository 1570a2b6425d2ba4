//! Best-effort extraction of card and bank names from provider result text.
//!
//! These are heuristics over free text, not a parser: when nothing matches,
//! the bank falls back to `"Unknown Bank"` and the card name to the title
//! verbatim.

use crate::models::{
    CardKind, CardOffer, DISPLAY_CARDHOLDER, DISPLAY_EXPIRY, DISPLAY_LAST_FOUR, OfferSource,
    ProviderId,
};
use crate::providers::provider::ProviderItem;
use crate::registry;

pub(crate) fn offer_from_item(
    item: &ProviderItem,
    provider: ProviderId,
    ordinal: usize,
) -> CardOffer {
    let name = card_name(&item.title);
    let bank = bank_name(item);
    let description = if item.snippet.is_empty() {
        format!("Live search result for {name}.")
    } else {
        item.snippet.clone()
    };

    CardOffer {
        id: format!("web-{}-{}", provider.slug(), ordinal),
        name,
        kind: CardKind::Credit,
        bank,
        last_four_digits: DISPLAY_LAST_FOUR.to_string(),
        expiry_date: DISPLAY_EXPIRY.to_string(),
        cardholder_name: DISPLAY_CARDHOLDER.to_string(),
        description,
        image_url: None,
        source: OfferSource::RealTimeSearch,
        search_url: Some(item.link.clone()),
        snippet: (!item.snippet.is_empty()).then(|| item.snippet.clone()),
        fees: None,
        benefits: Vec::new(),
        eligibility: None,
    }
}

/// Attributes a result to a bank: link domain first, then title text,
/// then snippet text. `"Unknown Bank"` when nothing matches.
pub(crate) fn bank_name(item: &ProviderItem) -> String {
    if let Some(host) = host_of(&item.link) {
        if let Some(bank) = registry::bank_for_domain(&host) {
            return bank.display_name.to_string();
        }
    }
    if let Some(bank) = registry::bank_for_text(&item.title) {
        return bank.display_name.to_string();
    }
    if let Some(bank) = registry::bank_for_text(&item.snippet) {
        return bank.display_name.to_string();
    }
    "Unknown Bank".to_string()
}

/// Cuts a result title down to the card-name phrase: drops `" | site"` and
/// `" - site"` tails, then truncates after the first word "card". Titles
/// with no such word come back verbatim.
pub(crate) fn card_name(title: &str) -> String {
    let head = title.split(" | ").next().unwrap_or(title);
    let head = head.split(" - ").next().unwrap_or(head).trim();

    let mut words = Vec::new();
    for word in head.split_whitespace() {
        words.push(word);
        let bare = word.trim_matches(|character: char| !character.is_alphanumeric());
        if bare.eq_ignore_ascii_case("card") {
            return words.join(" ");
        }
    }
    head.to_string()
}

fn host_of(link: &str) -> Option<String> {
    let rest = link.split_once("://").map(|(_, rest)| rest).unwrap_or(link);
    let host = rest.split(['/', '?', '#']).next()?;
    let host = host.rsplit('@').next()?;
    let host = host.split(':').next()?;
    if host.is_empty() {
        None
    } else {
        Some(host.to_ascii_lowercase())
    }
}

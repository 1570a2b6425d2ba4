use std::collections::HashSet;

use crate::models::CardOffer;

/// Collapses duplicate offers by their case-insensitive `(name, bank)` key.
/// First occurrence wins; relative order is otherwise preserved.
pub fn dedupe_offers(offers: Vec<CardOffer>) -> Vec<CardOffer> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(offers.len());
    for offer in offers {
        if seen.insert(offer.dedupe_key()) {
            unique.push(offer);
        }
    }
    unique
}

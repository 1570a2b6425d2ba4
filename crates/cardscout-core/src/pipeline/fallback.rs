use crate::models::{
    CardKind, CardOffer, DISPLAY_CARDHOLDER, DISPLAY_EXPIRY, DISPLAY_LAST_FOUR, OfferSource,
    SearchError, SearchQuery,
};
use crate::registry;

pub trait SynthesizedTier: Send + Sync {
    fn fabricate(&self, query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError>;
}

/// Last data tier: one generic offer per major bank, every offer named after
/// the query itself and tagged `ai-generated`.
pub struct MajorBankFallback;

impl SynthesizedTier for MajorBankFallback {
    fn fabricate(&self, query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError> {
        let name = display_query_name(&query.text);
        let offers = registry::major_banks()
            .enumerate()
            .map(|(ordinal, bank)| CardOffer {
                id: format!("gen-{ordinal}"),
                name: name.clone(),
                kind: CardKind::Credit,
                bank: bank.display_name.to_string(),
                last_four_digits: DISPLAY_LAST_FOUR.to_string(),
                expiry_date: DISPLAY_EXPIRY.to_string(),
                cardholder_name: DISPLAY_CARDHOLDER.to_string(),
                description: format!(
                    "{} options from {}. Contact the bank for current terms and pricing.",
                    name, bank.display_name
                ),
                image_url: None,
                source: OfferSource::AiGenerated,
                search_url: None,
                snippet: None,
                fees: None,
                benefits: Vec::new(),
                eligibility: None,
            })
            .collect();
        Ok(offers)
    }
}

/// The one record the pipeline returns when every tier failed.
pub(crate) fn placeholder_offer(query: &SearchQuery) -> CardOffer {
    CardOffer {
        id: "fallback-0".to_string(),
        name: display_query_name(&query.text),
        kind: CardKind::Credit,
        bank: "Multiple Banks".to_string(),
        last_four_digits: DISPLAY_LAST_FOUR.to_string(),
        expiry_date: DISPLAY_EXPIRY.to_string(),
        cardholder_name: DISPLAY_CARDHOLDER.to_string(),
        description: "Card search is temporarily unavailable. Please retry in a moment."
            .to_string(),
        image_url: None,
        source: OfferSource::AiGenerated,
        search_url: None,
        snippet: None,
        fees: None,
        benefits: Vec::new(),
        eligibility: None,
    }
}

fn display_query_name(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "Credit Card".to_string()
    } else {
        trimmed.to_string()
    }
}

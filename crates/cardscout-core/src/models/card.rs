use serde::{Deserialize, Serialize};

/// Display placeholders for offers that do not belong to an issued card.
pub const DISPLAY_LAST_FOUR: &str = "****";
pub const DISPLAY_EXPIRY: &str = "MM/YY";
pub const DISPLAY_CARDHOLDER: &str = "Card Holder";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Credit,
    Debit,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OfferSource {
    RealTimeSearch,
    Cached,
    Database,
    AiGenerated,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardOffer {
    pub id: String,
    pub name: String,
    pub kind: CardKind,
    pub bank: String,
    pub last_four_digits: String,
    pub expiry_date: String,
    pub cardholder_name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub source: OfferSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snippet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fees: Option<String>,
    #[serde(default)]
    pub benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
}

impl CardOffer {
    /// Case-insensitive `(name, bank)` identity used to collapse duplicate
    /// offers within a result set.
    pub fn dedupe_key(&self) -> String {
        format!(
            "{}-{}",
            self.name.to_lowercase(),
            self.bank.to_lowercase()
        )
    }
}

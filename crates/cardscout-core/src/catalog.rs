use crate::models::{
    CardKind, CardOffer, DISPLAY_CARDHOLDER, DISPLAY_EXPIRY, DISPLAY_LAST_FOUR, OfferSource,
    SearchError, SearchQuery,
};

/// Most offers a catalog query may return.
const MATCH_LIMIT: usize = 20;
/// Entries served when the query carries no usable tokens.
const UNTOKENIZED_LIMIT: usize = 10;
/// Tokens shorter than this are noise ("a", "of", "in").
const MIN_TOKEN_LEN: usize = 3;

pub trait CatalogTier: Send + Sync {
    fn matches(&self, query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError>;
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CatalogCard {
    pub name: &'static str,
    pub bank: &'static str,
    pub kind: CardKind,
    pub description: &'static str,
    pub fees: &'static str,
    pub benefits: &'static [&'static str],
    pub eligibility: &'static str,
}

impl CatalogCard {
    fn to_offer(&self, ordinal: usize) -> CardOffer {
        CardOffer {
            id: format!("db-{ordinal:02}"),
            name: self.name.to_string(),
            kind: self.kind,
            bank: self.bank.to_string(),
            last_four_digits: DISPLAY_LAST_FOUR.to_string(),
            expiry_date: DISPLAY_EXPIRY.to_string(),
            cardholder_name: DISPLAY_CARDHOLDER.to_string(),
            description: self.description.to_string(),
            image_url: None,
            source: OfferSource::Database,
            search_url: None,
            snippet: None,
            fees: Some(self.fees.to_string()),
            benefits: self.benefits.iter().map(|benefit| benefit.to_string()).collect(),
            eligibility: Some(self.eligibility.to_string()),
        }
    }
}

const CATALOG: [CatalogCard; 25] = [
    CatalogCard {
        name: "Regalia Gold Credit Card",
        bank: "HDFC Bank",
        kind: CardKind::Credit,
        description: "Premium lifestyle card with lounge access and milestone vouchers.",
        fees: "\u{20b9}2,500 + GST annually, waived on \u{20b9}4 lakh annual spends",
        benefits: &[
            "Complimentary airport lounge access",
            "Milestone bonus vouchers",
            "Reward points on every spend",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}1 lakh",
    },
    CatalogCard {
        name: "Millennia Credit Card",
        bank: "HDFC Bank",
        kind: CardKind::Credit,
        description: "Cashback card aimed at online-first spenders.",
        fees: "\u{20b9}1,000 + GST annually, waived on \u{20b9}1 lakh annual spends",
        benefits: &[
            "5% cashback on partner online merchants",
            "1% cashback on all other spends",
            "Quarterly lounge access on spends",
        ],
        eligibility: "Salaried or self-employed, age 21-60",
    },
    CatalogCard {
        name: "MoneyBack+ Credit Card",
        bank: "HDFC Bank",
        kind: CardKind::Credit,
        description: "Entry-level rewards card with accelerated points on daily shopping.",
        fees: "\u{20b9}500 + GST annually, waived on \u{20b9}50,000 annual spends",
        benefits: &[
            "10x points on partner merchants",
            "Gift voucher on quarterly spends",
        ],
        eligibility: "Minimum monthly income \u{20b9}20,000",
    },
    CatalogCard {
        name: "Infinia Credit Card Metal Edition",
        bank: "HDFC Bank",
        kind: CardKind::Credit,
        description: "Invite-only metal card with unlimited lounge access and concierge.",
        fees: "\u{20b9}12,500 + GST annually",
        benefits: &[
            "Unlimited airport lounge access",
            "Global concierge assistance",
            "Low foreign-currency markup",
        ],
        eligibility: "By invitation",
    },
    CatalogCard {
        name: "Amazon Pay ICICI Credit Card",
        bank: "ICICI Bank",
        kind: CardKind::Credit,
        description: "Lifetime-free cashback card for Amazon shoppers.",
        fees: "No annual fee",
        benefits: &[
            "5% back on Amazon for Prime members",
            "3% back on Amazon for non-Prime members",
            "1% back everywhere else",
        ],
        eligibility: "Good credit history required",
    },
    CatalogCard {
        name: "Coral Credit Card",
        bank: "ICICI Bank",
        kind: CardKind::Credit,
        description: "Gemstone-series card with dining and movie privileges.",
        fees: "\u{20b9}500 + GST annually, waived on \u{20b9}1.5 lakh annual spends",
        benefits: &[
            "Buy one get one movie tickets",
            "Dining discounts at partner restaurants",
            "Railway lounge access",
        ],
        eligibility: "Minimum monthly income \u{20b9}20,000",
    },
    CatalogCard {
        name: "Sapphiro Credit Card",
        bank: "ICICI Bank",
        kind: CardKind::Credit,
        description: "Premium travel card from the gemstone series.",
        fees: "\u{20b9}3,500 joining, \u{20b9}3,500 + GST annually",
        benefits: &[
            "International lounge access",
            "Golf rounds every quarter",
            "Travel vouchers on joining",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}80,000",
    },
    CatalogCard {
        name: "Platinum Chip Credit Card",
        bank: "ICICI Bank",
        kind: CardKind::Credit,
        description: "No-frills chip card for everyday secure payments.",
        fees: "No annual fee",
        benefits: &[
            "Reward points on every spend",
            "1% fuel surcharge waiver",
        ],
        eligibility: "Salaried or self-employed, age 21-60",
    },
    CatalogCard {
        name: "SimplyCLICK SBI Card",
        bank: "SBI Card",
        kind: CardKind::Credit,
        description: "Online-shopping rewards card with partner accelerators.",
        fees: "\u{20b9}499 + GST annually, waived on \u{20b9}1 lakh annual spends",
        benefits: &[
            "10x points on partner online merchants",
            "5x points on all other online spends",
            "Amazon voucher on joining",
        ],
        eligibility: "Minimum monthly income \u{20b9}20,000",
    },
    CatalogCard {
        name: "SimplySAVE SBI Card",
        bank: "SBI Card",
        kind: CardKind::Credit,
        description: "Daily-spends card with accelerated points on groceries and dining.",
        fees: "\u{20b9}499 + GST annually, waived on \u{20b9}1 lakh annual spends",
        benefits: &[
            "10x points on dining, movies and groceries",
            "1% fuel surcharge waiver",
        ],
        eligibility: "Salaried or self-employed, age 21-60",
    },
    CatalogCard {
        name: "SBI Card ELITE",
        bank: "SBI Card",
        kind: CardKind::Credit,
        description: "Premium card with milestone rewards and club memberships.",
        fees: "\u{20b9}4,999 + GST annually",
        benefits: &[
            "Free movie tickets every month",
            "International and domestic lounge access",
            "Club Vistara and Trident memberships",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}60,000",
    },
    CatalogCard {
        name: "SBI Card PRIME",
        bank: "SBI Card",
        kind: CardKind::Credit,
        description: "Mid-tier rewards card with quarterly milestone vouchers.",
        fees: "\u{20b9}2,999 + GST annually, waived on \u{20b9}3 lakh annual spends",
        benefits: &[
            "Milestone bonus vouchers",
            "Domestic lounge access every quarter",
            "Reward points on dining and groceries",
        ],
        eligibility: "Minimum monthly income \u{20b9}35,000",
    },
    CatalogCard {
        name: "Cashback SBI Card",
        bank: "SBI Card",
        kind: CardKind::Credit,
        description: "Flat cashback on online spends with no merchant restrictions.",
        fees: "\u{20b9}999 + GST annually, waived on \u{20b9}2 lakh annual spends",
        benefits: &[
            "5% cashback on online spends",
            "1% cashback on offline spends",
        ],
        eligibility: "Good credit history required",
    },
    CatalogCard {
        name: "ACE Credit Card",
        bank: "Axis Bank",
        kind: CardKind::Credit,
        description: "Cashback card with bill-payment accelerators.",
        fees: "\u{20b9}499 + GST annually, waived on \u{20b9}2 lakh annual spends",
        benefits: &[
            "5% cashback on bill payments",
            "4% cashback on partner food delivery",
            "2% cashback everywhere else",
        ],
        eligibility: "Salaried or self-employed, age 21-60",
    },
    CatalogCard {
        name: "Flipkart Axis Bank Credit Card",
        bank: "Axis Bank",
        kind: CardKind::Credit,
        description: "Co-branded cashback card for Flipkart ecosystem spends.",
        fees: "\u{20b9}500 + GST annually, waived on \u{20b9}3.5 lakh annual spends",
        benefits: &[
            "5% cashback on Flipkart",
            "4% cashback on partner merchants",
            "Introductory vouchers on joining",
        ],
        eligibility: "Minimum monthly income \u{20b9}25,000",
    },
    CatalogCard {
        name: "Magnus Credit Card",
        bank: "Axis Bank",
        kind: CardKind::Credit,
        description: "High-end travel card with transferable reward points.",
        fees: "\u{20b9}12,500 + GST annually",
        benefits: &[
            "Points transfer to airline partners",
            "Unlimited international lounge access",
            "Monthly milestone bonus",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}1.5 lakh",
    },
    CatalogCard {
        name: "My Zone Credit Card",
        bank: "Axis Bank",
        kind: CardKind::Credit,
        description: "Entertainment-focused card with streaming and movie offers.",
        fees: "\u{20b9}500 + GST annually",
        benefits: &[
            "Complimentary streaming subscription",
            "Buy one get one movie tickets",
            "Dining discounts at partner restaurants",
        ],
        eligibility: "Minimum monthly income \u{20b9}20,000",
    },
    CatalogCard {
        name: "811 #DreamDifferent Credit Card",
        bank: "Kotak Mahindra Bank",
        kind: CardKind::Credit,
        description: "Secured lifetime-free card against a fixed deposit.",
        fees: "No annual fee",
        benefits: &[
            "Issued against fixed deposit",
            "Reward points on online spends",
            "Interest continues on the deposit",
        ],
        eligibility: "Fixed deposit with the bank",
    },
    CatalogCard {
        name: "League Platinum Credit Card",
        bank: "Kotak Mahindra Bank",
        kind: CardKind::Credit,
        description: "Rewards card with milestone fee reversal.",
        fees: "\u{20b9}499 + GST annually, waived on \u{20b9}50,000 annual spends",
        benefits: &[
            "8 reward points per \u{20b9}150 spent",
            "Railway surcharge waiver",
            "Fuel surcharge waiver",
        ],
        eligibility: "Salaried or self-employed, age 21-65",
    },
    CatalogCard {
        name: "Royale Signature Credit Card",
        bank: "Kotak Mahindra Bank",
        kind: CardKind::Credit,
        description: "Signature-tier card with travel and dining accelerators.",
        fees: "\u{20b9}999 + GST annually, waived on \u{20b9}1 lakh annual spends",
        benefits: &[
            "Domestic lounge access",
            "Accelerated points on travel and dining",
        ],
        eligibility: "Minimum monthly income \u{20b9}40,000",
    },
    CatalogCard {
        name: "Marquee Credit Card",
        bank: "Yes Bank",
        kind: CardKind::Credit,
        description: "Flagship card with unlimited lounge visits and low markup.",
        fees: "\u{20b9}9,999 + GST annually",
        benefits: &[
            "Unlimited domestic and international lounge access",
            "Low foreign-currency markup",
            "Buy one get one movie tickets",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}1 lakh",
    },
    CatalogCard {
        name: "First Exclusive Credit Card",
        bank: "Yes Bank",
        kind: CardKind::Credit,
        description: "Premium card for the bank's wealth-management customers.",
        fees: "\u{20b9}1,999 + GST annually",
        benefits: &[
            "Golf lessons and rounds",
            "International lounge access",
            "Concierge assistance",
        ],
        eligibility: "Existing bank relationship preferred",
    },
    CatalogCard {
        name: "Legend Credit Card",
        bank: "IndusInd Bank",
        kind: CardKind::Credit,
        description: "Lifetime-free premium card with weekend accelerators.",
        fees: "No annual fee",
        benefits: &[
            "Double points on weekend spends",
            "Complimentary lounge access",
            "Travel insurance cover",
        ],
        eligibility: "Salaried with monthly income above \u{20b9}50,000",
    },
    CatalogCard {
        name: "Platinum Aura Edge Credit Card",
        bank: "IndusInd Bank",
        kind: CardKind::Credit,
        description: "Choose-your-own rewards plan card with no annual fee.",
        fees: "No annual fee",
        benefits: &[
            "Selectable rewards plan",
            "Fuel surcharge waiver",
        ],
        eligibility: "Salaried or self-employed, age 21-60",
    },
    CatalogCard {
        name: "Smart Credit Card",
        bank: "Standard Chartered",
        kind: CardKind::Credit,
        description: "Digital-first cashback card with EMI-friendly pricing.",
        fees: "\u{20b9}499 + GST annually, waived on \u{20b9}1.2 lakh annual spends",
        benefits: &[
            "2% cashback on online spends",
            "1% cashback on offline spends",
            "Low interest on extended credit",
        ],
        eligibility: "Minimum monthly income \u{20b9}25,000",
    },
];

pub fn catalog_cards() -> &'static [CatalogCard] {
    &CATALOG
}

/// The hand-authored card database used when live search yields nothing.
pub struct CuratedCatalog;

impl CatalogTier for CuratedCatalog {
    fn matches(&self, query: &SearchQuery) -> Result<Vec<CardOffer>, SearchError> {
        let normalized = query.normalized();
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|token| token.len() >= MIN_TOKEN_LEN)
            .collect();

        let offers = if tokens.is_empty() {
            CATALOG
                .iter()
                .enumerate()
                .take(UNTOKENIZED_LIMIT)
                .map(|(ordinal, card)| card.to_offer(ordinal))
                .collect()
        } else {
            CATALOG
                .iter()
                .enumerate()
                .filter(|(_, card)| tokens.iter().any(|token| token_matches(token, card)))
                .take(MATCH_LIMIT)
                .map(|(ordinal, card)| card.to_offer(ordinal))
                .collect()
        };

        Ok(offers)
    }
}

fn token_matches(token: &str, card: &CatalogCard) -> bool {
    let name = card.name.to_lowercase();
    let bank = card.bank.to_lowercase();
    if name.contains(token) || bank.contains(token) {
        return true;
    }
    // "save" must also surface the Simply* family.
    if token == "save" && name.contains("simply") {
        return true;
    }
    // Both spellings of the Millennia card cross-match; the two branches are
    // intentionally kept separate.
    if token == "millenia" && (name.contains("millennia") || name.contains("millenia")) {
        return true;
    }
    if token == "millennia" && (name.contains("millenia") || name.contains("millennia")) {
        return true;
    }
    false
}

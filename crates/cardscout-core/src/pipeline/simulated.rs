use rand::Rng;
use rand::seq::SliceRandom;

use crate::models::{
    CardKind, CardOffer, DISPLAY_CARDHOLDER, OfferSource, SearchProgress, SearchQuery,
    SearchStatus,
};
use crate::pipeline::{ProgressFn, emit};
use crate::registry;

const NAME_VARIANTS: &[&str] = &[
    "Platinum",
    "Gold",
    "Rewards",
    "Cashback",
    "Travel Elite",
    "Premier",
    "Signature",
];

const FEE_POOL: &[&str] = &[
    "No annual fee",
    "\u{20b9}499 + GST annually",
    "\u{20b9}999 + GST annually",
    "\u{20b9}2,999 + GST annually, waived on annual spends",
];

const BENEFIT_POOL: &[&str] = &[
    "5% cashback on online shopping",
    "Complimentary airport lounge access",
    "1% fuel surcharge waiver",
    "Reward points on every spend",
    "Milestone bonus vouchers",
    "Buy one get one movie tickets",
    "Dining discounts at partner restaurants",
    "Zero liability on lost card",
    "Contactless payments",
    "EMI conversion on large purchases",
];

const ELIGIBILITY_POOL: &[&str] = &[
    "Salaried or self-employed, age 21-60",
    "Minimum monthly income \u{20b9}25,000",
    "Good credit history required",
    "Existing bank relationship preferred",
];

/// Stand-in for the live tier when no provider is configured: walks every
/// known bank and synthesizes 1-3 offers per bank from the fixed pools.
/// Fully determined by the caller's RNG state.
pub(crate) fn simulated_search<R: Rng>(
    rng: &mut R,
    query: &SearchQuery,
    progress: Option<&ProgressFn>,
) -> Vec<CardOffer> {
    let banks = registry::banks();
    let mut offers = Vec::new();

    for (index, bank) in banks.iter().enumerate() {
        emit(
            progress,
            SearchProgress {
                completed: index,
                total: banks.len(),
                current_bank: bank.display_name.to_string(),
                status: SearchStatus::Searching,
            },
        );

        let count = rng.gen_range(1..=3usize);
        let variants: Vec<&str> = NAME_VARIANTS
            .choose_multiple(rng, count)
            .copied()
            .collect();

        for variant in variants {
            let benefit_count = rng.gen_range(2..=5usize);
            let benefits: Vec<String> = BENEFIT_POOL
                .choose_multiple(rng, benefit_count)
                .map(|benefit| benefit.to_string())
                .collect();
            let fee = FEE_POOL.choose(rng).copied().unwrap_or(FEE_POOL[0]);
            let eligibility = ELIGIBILITY_POOL
                .choose(rng)
                .copied()
                .unwrap_or(ELIGIBILITY_POOL[0]);

            offers.push(CardOffer {
                id: format!("sim-{}-{}", index, offers.len()),
                name: format!("{} {} Credit Card", bank.display_name, variant),
                kind: CardKind::Credit,
                bank: bank.display_name.to_string(),
                last_four_digits: format!("{:04}", rng.gen_range(0..10_000)),
                expiry_date: format!("{:02}/{}", rng.gen_range(1..=12), rng.gen_range(27..=30)),
                cardholder_name: DISPLAY_CARDHOLDER.to_string(),
                description: format!(
                    "{} credit card from {} matched to \"{}\".",
                    variant,
                    bank.display_name,
                    query.text.trim()
                ),
                image_url: None,
                source: OfferSource::RealTimeSearch,
                search_url: None,
                snippet: None,
                fees: Some(fee.to_string()),
                benefits,
                eligibility: Some(eligibility.to_string()),
            });
        }

        emit(
            progress,
            SearchProgress {
                completed: index + 1,
                total: banks.len(),
                current_bank: bank.display_name.to_string(),
                status: SearchStatus::Parsing,
            },
        );
    }

    offers
}

use crate::registry;

/// Ceiling on planned provider queries per search, across all banks.
pub const MAX_PLANNED_QUERIES: usize = 20;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlannedQuery {
    pub text: String,
    pub bank: &'static str,
}

/// Builds the ordered list of provider queries for one card search.
///
/// Three templates per known bank, in registry order: a site-restricted
/// phrase search, a benefits search and an apply-online search. The plan is
/// cut off at `MAX_PLANNED_QUERIES`; per-provider caps are applied later.
pub fn build_query_plan(card_query: &str) -> Vec<PlannedQuery> {
    let mut plan = Vec::new();
    for bank in registry::banks() {
        let templates = [
            format!("site:{} \"{}\" credit card", bank.domain, card_query),
            format!("{} {} credit card benefits", bank.display_name, card_query),
            format!("{} {} credit card apply online", bank.display_name, card_query),
        ];
        for text in templates {
            if plan.len() == MAX_PLANNED_QUERIES {
                return plan;
            }
            plan.push(PlannedQuery {
                text,
                bank: bank.display_name,
            });
        }
    }
    plan
}

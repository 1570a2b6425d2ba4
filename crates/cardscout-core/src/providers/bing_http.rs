use crate::models::{ProviderId, SearchError, SearchErrorKind, SearchTier};
use crate::providers::bing::BingSearchSource;
use crate::providers::http_utils;
use crate::providers::provider::ProviderResult;

const ENDPOINT: &str = "https://api.bing.microsoft.com/v7.0/search";
const MAX_RESULTS_PER_CALL: usize = 20;

pub struct UreqBingSource {
    agent: ureq::Agent,
    api_key: Option<String>,
}

impl UreqBingSource {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            agent: http_utils::agent(),
            api_key,
        }
    }
}

impl BingSearchSource for UreqBingSource {
    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    fn fetch_raw(&self, query_text: &str, max_results: usize) -> ProviderResult<String> {
        let Some(api_key) = &self.api_key else {
            return Err(SearchError {
                provider: Some(ProviderId::BingWebSearch),
                tier: Some(SearchTier::LiveSearch),
                kind: SearchErrorKind::CredentialsMissing,
                message: "bing web search credentials are not configured".to_string(),
            });
        };

        let count = max_results.clamp(1, MAX_RESULTS_PER_CALL).to_string();
        http_utils::get_body(
            &self.agent,
            ENDPOINT,
            &[("q", query_text), ("count", count.as_str())],
            &[("Ocp-Apim-Subscription-Key", api_key.as_str())],
        )
        .map_err(|error| error.into_search_error(ProviderId::BingWebSearch))
    }
}

use crate::models::{ProviderId, SearchError, SearchErrorKind, SearchTier};
use crate::providers::google::{GoogleCredentials, GoogleSearchSource};
use crate::providers::http_utils;
use crate::providers::provider::ProviderResult;

const ENDPOINT: &str = "https://www.googleapis.com/customsearch/v1";
/// The Custom Search API rejects `num` above 10.
const MAX_RESULTS_PER_CALL: usize = 10;

pub struct UreqGoogleSource {
    agent: ureq::Agent,
    credentials: Option<GoogleCredentials>,
}

impl UreqGoogleSource {
    pub fn new(credentials: Option<GoogleCredentials>) -> Self {
        Self {
            agent: http_utils::agent(),
            credentials,
        }
    }
}

impl GoogleSearchSource for UreqGoogleSource {
    fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    fn fetch_raw(&self, query_text: &str, max_results: usize) -> ProviderResult<String> {
        let Some(credentials) = &self.credentials else {
            return Err(SearchError {
                provider: Some(ProviderId::GoogleCustomSearch),
                tier: Some(SearchTier::LiveSearch),
                kind: SearchErrorKind::CredentialsMissing,
                message: "google custom search credentials are not configured".to_string(),
            });
        };

        let count = max_results.clamp(1, MAX_RESULTS_PER_CALL).to_string();
        http_utils::get_body(
            &self.agent,
            ENDPOINT,
            &[
                ("key", credentials.api_key.as_str()),
                ("cx", credentials.engine_id.as_str()),
                ("q", query_text),
                ("num", count.as_str()),
            ],
            &[],
        )
        .map_err(|error| error.into_search_error(ProviderId::GoogleCustomSearch))
    }
}

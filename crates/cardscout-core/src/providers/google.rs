use serde::Deserialize;
use serde_json::Value;

use crate::models::{ProviderDescriptor, ProviderId, SearchError, SearchErrorKind, SearchTier};
use crate::providers::provider::{ProviderItem, ProviderResult, SearchProvider};

const GOOGLE_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: ProviderId::GoogleCustomSearch,
    display_name: "Google Programmable Search",
    query_cap: 10,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GoogleCredentials {
    pub api_key: String,
    pub engine_id: String,
}

pub trait GoogleSearchSource: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Raw JSON body of one Custom Search API call.
    fn fetch_raw(&self, query_text: &str, max_results: usize) -> ProviderResult<String>;
}

pub struct GoogleProvider<S: GoogleSearchSource> {
    source: S,
}

impl<S: GoogleSearchSource> GoogleProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: GoogleSearchSource> SearchProvider for GoogleProvider<S> {
    fn descriptor(&self) -> &ProviderDescriptor {
        &GOOGLE_DESCRIPTOR
    }

    fn is_configured(&self) -> bool {
        self.source.is_configured()
    }

    fn fetch(&self, query_text: &str, max_results: usize) -> ProviderResult<Vec<ProviderItem>> {
        let raw = self.source.fetch_raw(query_text, max_results)?;
        parse_google_items(&raw)
    }
}

#[derive(Deserialize)]
struct GoogleSearchResponse {
    #[serde(default)]
    items: Vec<Value>,
}

fn parse_google_items(raw: &str) -> ProviderResult<Vec<ProviderItem>> {
    let body: GoogleSearchResponse = serde_json::from_str(raw).map_err(|error| parse_error(
        format!("google response body is not valid JSON: {error}"),
    ))?;

    let mut parsed = Vec::new();
    let mut malformed_entries = 0usize;

    for entry in &body.items {
        match item_from_entry(entry) {
            Some(item) => parsed.push(item),
            None => malformed_entries += 1,
        }
    }

    if parsed.is_empty() && malformed_entries > 0 {
        return Err(parse_error(
            "unable to parse any google result entries".to_string(),
        ));
    }

    Ok(parsed)
}

fn item_from_entry(entry: &Value) -> Option<ProviderItem> {
    let title = entry.get("title").and_then(Value::as_str)?;
    let link = entry.get("link").and_then(Value::as_str)?;
    let snippet = entry
        .get("snippet")
        .and_then(Value::as_str)
        .unwrap_or_default();

    Some(ProviderItem {
        title: title.to_string(),
        snippet: snippet.to_string(),
        link: link.to_string(),
    })
}

fn parse_error(message: String) -> SearchError {
    SearchError {
        provider: Some(ProviderId::GoogleCustomSearch),
        tier: Some(SearchTier::LiveSearch),
        kind: SearchErrorKind::ParseFailure,
        message,
    }
}

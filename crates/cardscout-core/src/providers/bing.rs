use serde::Deserialize;
use serde_json::Value;

use crate::models::{ProviderDescriptor, ProviderId, SearchError, SearchErrorKind, SearchTier};
use crate::providers::provider::{ProviderItem, ProviderResult, SearchProvider};

const BING_DESCRIPTOR: ProviderDescriptor = ProviderDescriptor {
    id: ProviderId::BingWebSearch,
    display_name: "Bing Web Search",
    query_cap: 5,
};

pub trait BingSearchSource: Send + Sync {
    fn is_configured(&self) -> bool;

    /// Raw JSON body of one Web Search API call.
    fn fetch_raw(&self, query_text: &str, max_results: usize) -> ProviderResult<String>;
}

pub struct BingProvider<S: BingSearchSource> {
    source: S,
}

impl<S: BingSearchSource> BingProvider<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: BingSearchSource> SearchProvider for BingProvider<S> {
    fn descriptor(&self) -> &ProviderDescriptor {
        &BING_DESCRIPTOR
    }

    fn is_configured(&self) -> bool {
        self.source.is_configured()
    }

    fn fetch(&self, query_text: &str, max_results: usize) -> ProviderResult<Vec<ProviderItem>> {
        let raw = self.source.fetch_raw(query_text, max_results)?;
        parse_bing_items(&raw)
    }
}

#[derive(Deserialize)]
struct BingSearchResponse {
    #[serde(default, rename = "webPages")]
    web_pages: Option<BingWebPages>,
}

#[derive(Deserialize)]
struct BingWebPages {
    #[serde(default)]
    value: Vec<Value>,
}

fn parse_bing_items(raw: &str) -> ProviderResult<Vec<ProviderItem>> {
    let body: BingSearchResponse = serde_json::from_str(raw).map_err(|error| parse_error(
        format!("bing response body is not valid JSON: {error}"),
    ))?;

    let entries = body.web_pages.map(|pages| pages.value).unwrap_or_default();

    let mut parsed = Vec::new();
    let mut malformed_entries = 0usize;

    for entry in &entries {
        match item_from_entry(entry) {
            Some(item) => parsed.push(item),
            None => malformed_entries += 1,
        }
    }

    if parsed.is_empty() && malformed_entries > 0 {
        return Err(parse_error(
            "unable to parse any bing result entries".to_string(),
        ));
    }

    Ok(parsed)
}

fn item_from_entry(entry: &Value) -> Option<ProviderItem> {
    let title = entry.get("name").and_then(Value::as_str)?;
    let link = entry.get("url").and_then(Value::as_str)?;
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
        provider: Some(ProviderId::BingWebSearch),
        tier: Some(SearchTier::LiveSearch),
        kind: SearchErrorKind::ParseFailure,
        message,
    }
}

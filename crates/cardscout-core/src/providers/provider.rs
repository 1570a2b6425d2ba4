use crate::models::{ProviderDescriptor, SearchError};

pub type ProviderResult<T> = Result<T, SearchError>;

/// One raw result entry from an external web-search provider.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProviderItem {
    pub title: String,
    pub snippet: String,
    pub link: String,
}

pub trait SearchProvider: Send + Sync {
    fn descriptor(&self) -> &ProviderDescriptor;

    /// Whether credentials are present. Absence is an expected condition
    /// that routes the pipeline to its fallback tiers, not an error.
    fn is_configured(&self) -> bool;

    fn fetch(&self, query_text: &str, max_results: usize) -> ProviderResult<Vec<ProviderItem>>;
}

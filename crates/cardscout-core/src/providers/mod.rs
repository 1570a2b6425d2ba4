pub mod bing;
pub mod bing_http;
pub(crate) mod extract;
pub mod google;
pub mod google_http;
pub(crate) mod http_utils;
pub mod provider;

pub use bing::{BingProvider, BingSearchSource};
pub use bing_http::UreqBingSource;
pub use google::{GoogleCredentials, GoogleProvider, GoogleSearchSource};
pub use google_http::UreqGoogleSource;
pub use provider::{ProviderItem, ProviderResult, SearchProvider};

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use cardscout_core::models::{SearchProgress, SearchQuery};
use cardscout_core::persistence::InMemorySearchCache;
use cardscout_core::pipeline::{ProgressFn, SearchPipeline};
use cardscout_core::providers::{
    BingProvider, GoogleCredentials, GoogleProvider, UreqBingSource, UreqGoogleSource,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let query_text = env::args().skip(1).collect::<Vec<_>>().join(" ");
    if query_text.trim().is_empty() {
        eprintln!("usage: cardscout <card query>");
        return ExitCode::from(2);
    }

    // Missing credentials are a normal condition: the pipeline falls back
    // to its simulated and curated tiers.
    let google_credentials = match (env::var("GOOGLE_API_KEY"), env::var("GOOGLE_SEARCH_CX")) {
        (Ok(api_key), Ok(engine_id)) => Some(GoogleCredentials { api_key, engine_id }),
        _ => None,
    };
    let bing_key = env::var("BING_API_KEY").ok();

    let pipeline = SearchPipeline::new(
        Arc::new(InMemorySearchCache::new()),
        Some(Arc::new(GoogleProvider::new(UreqGoogleSource::new(
            google_credentials,
        )))),
        Some(Arc::new(BingProvider::new(UreqBingSource::new(bing_key)))),
    );

    let observer = |snapshot: &SearchProgress| {
        eprintln!(
            "[{}/{}] {:?} {}",
            snapshot.completed, snapshot.total, snapshot.status, snapshot.current_bank
        );
    };
    let observer_ref: &ProgressFn = &observer;

    let query = SearchQuery::new(query_text);
    let offers = pipeline.search(&query, Some(observer_ref));

    match serde_json::to_string_pretty(&offers) {
        Ok(body) => {
            println!("{body}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("failed to encode results: {error}");
            ExitCode::FAILURE
        }
    }
}

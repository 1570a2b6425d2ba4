use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchStatus {
    Searching,
    Parsing,
    Completed,
    Error,
}

/// Ephemeral progress snapshot emitted through the caller's observer.
/// Observational only; never persisted and never read back by the pipeline.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SearchProgress {
    pub completed: usize,
    pub total: usize,
    pub current_bank: String,
    pub status: SearchStatus,
}

use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::models::{ProviderId, SearchTier};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum SearchErrorKind {
    CredentialsMissing,
    HttpFailure,
    Timeout,
    ParseFailure,
    StorageFailure,
    Internal,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SearchError {
    pub provider: Option<ProviderId>,
    pub tier: Option<SearchTier>,
    pub kind: SearchErrorKind,
    pub message: String,
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

impl Error for SearchError {}

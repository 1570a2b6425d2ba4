use std::time::Duration;

use thiserror::Error;

use crate::models::{ProviderId, SearchError, SearchErrorKind, SearchTier};

/// Ceiling for one outbound provider call. A call that exceeds it counts as
/// a failed call within the live tier; it is not retried there.
pub(crate) const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

pub(crate) fn agent() -> ureq::Agent {
    ureq::AgentBuilder::new().timeout(HTTP_TIMEOUT).build()
}

#[derive(Debug, Error)]
pub(crate) enum TransportError {
    #[error("provider returned http status {status}")]
    Status { status: u16 },
    #[error("{message}")]
    Transport { message: String, timed_out: bool },
}

impl From<ureq::Error> for TransportError {
    fn from(error: ureq::Error) -> Self {
        match error {
            ureq::Error::Status(status, _) => Self::Status { status },
            ureq::Error::Transport(transport) => {
                let message = transport.to_string();
                let timed_out = message.contains("timed out");
                Self::Transport { message, timed_out }
            }
        }
    }
}

impl TransportError {
    pub(crate) fn into_search_error(self, provider: ProviderId) -> SearchError {
        let kind = match &self {
            Self::Status { .. } => SearchErrorKind::HttpFailure,
            Self::Transport { timed_out: true, .. } => SearchErrorKind::Timeout,
            Self::Transport { .. } => SearchErrorKind::HttpFailure,
        };
        SearchError {
            provider: Some(provider),
            tier: Some(SearchTier::LiveSearch),
            kind,
            message: self.to_string(),
        }
    }
}

/// GET `url` with the given query parameters and headers, returning the
/// response body as text.
pub(crate) fn get_body(
    agent: &ureq::Agent,
    url: &str,
    params: &[(&str, &str)],
    headers: &[(&str, &str)],
) -> Result<String, TransportError> {
    let mut request = agent.get(url);
    for (name, value) in params {
        request = request.query(name, value);
    }
    for (name, value) in headers {
        request = request.set(name, value);
    }

    let response = request.call().map_err(TransportError::from)?;
    response.into_string().map_err(|error| TransportError::Transport {
        timed_out: error.kind() == std::io::ErrorKind::TimedOut,
        message: format!("failed to read response body: {error}"),
    })
}

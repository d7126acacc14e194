use thiserror::Error;

/// Failure modes of one backend request.
///
/// Every variant collapses to a single failure at the UI layer; an empty
/// result set is not an error.
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Lookup service unreachable: {0}")]
    Network(String),

    #[error("Lookup service did not respond in time")]
    Timeout,

    #[error("Lookup service returned status {0}")]
    UpstreamStatus(u16),

    #[error("Lookup service returned an unreadable response: {0}")]
    Parse(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            BackendError::Timeout
        } else if err.is_decode() {
            BackendError::Parse(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}

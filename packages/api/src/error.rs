//! Errors raised while talking to the hostel services.

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid endpoint {endpoint:?}: {source}")]
    Url {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("{url} responded with HTTP {status}")]
    Status { status: u16, url: String },
}

impl ApiError {
    /// HTTP status of a rejected request, if that is what happened.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status().map(|s| s.as_u16()),
            ApiError::Url { .. } => None,
        }
    }
}

use thiserror::Error;

/// Failure of a call against the activities API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("request rejected with HTTP {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// The body could not be read as the expected shape.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided explanation, when the response carried one.
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        ApiError::Network(e.to_string())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid signup config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

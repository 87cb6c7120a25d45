//! Upstream fetch error types.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while fetching an OpenF1 resource.
///
/// Every variant is reported back to the calling agent as a flagged tool
/// result rather than a protocol failure.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream answered with a non-success HTTP status.
    #[error("HTTP error! status: {status} ({url})")]
    Status { status: StatusCode, url: String },

    /// The response body was not the expected JSON array of records.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// The request never produced a response (connection, TLS, DNS...).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// A filter value could not be placed on a query string.
    #[error("unsupported value for filter '{0}': only numbers, strings and booleans are allowed")]
    UnsupportedFilter(String),

    /// The query string could not be encoded.
    #[error("failed to encode query: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),

    /// The configured base URL cannot carry resource paths.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

impl FetchError {
    /// Create an "invalid URL" error.
    pub fn invalid_url(msg: impl Into<String>) -> Self {
        Self::InvalidUrl(msg.into())
    }

    /// HTTP status carried by this error, if the upstream answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

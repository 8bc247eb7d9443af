//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when talking to a remote service.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be delivered (connection refused, DNS, TLS...).
    #[error("Request failed: {0}")]
    RequestError(String),

    /// The service answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// The request did not complete within its deadline.
    #[error("Request timed out")]
    Timeout,
}

impl FetchError {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

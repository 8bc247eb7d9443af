//! Commerce error types.

use storefront_data::FetchError;
use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// None of these are fatal to the host: cart persistence failures are
/// reported as warnings, lookup failures are rendered as "temporarily
/// unavailable", and malformed snapshots are treated as an empty cart.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The item service could not be reached or gave an unusable answer.
    #[error("Item lookup failed: {0}")]
    LookupFailed(#[from] FetchError),

    /// Unknown sort key.
    #[error("Unknown sort key: {0}")]
    InvalidSortKey(String),

    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Arithmetic overflow.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Cache error.
    #[error("Cache error: {0}")]
    CacheError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<storefront_cache::CacheError> for CommerceError {
    fn from(e: storefront_cache::CacheError) -> Self {
        CommerceError::CacheError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

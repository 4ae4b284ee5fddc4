//! Fetch error type.

use std::time::Duration;
use thiserror::Error;

/// Why a GET did not produce a response.
///
/// Malformed URLs are classified by kind (URL parser or curl error code),
/// so callers never have to inspect message text.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL is not an absolute http(s) URL, or curl refused to parse it.
    #[error("invalid URL: {reason}")]
    InvalidUrl { reason: String },
    /// No complete response within the configured timeout.
    #[error("timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),
    /// Connection, DNS, TLS or protocol failure reported by curl.
    #[error(transparent)]
    Transport(#[from] curl::Error),
    /// The blocking fetch task panicked or was cancelled.
    #[error("fetch task failed: {0}")]
    Join(String),
}

impl FetchError {
    pub fn is_invalid_url(&self) -> bool {
        matches!(self, FetchError::InvalidUrl { .. })
    }
}

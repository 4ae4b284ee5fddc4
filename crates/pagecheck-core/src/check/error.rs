//! Check failure taxonomy.

use super::RequiredTag;
use crate::fetch::FetchError;
use crate::target::PAGES_SHAPE_HINT;
use std::time::Duration;
use thiserror::Error;

/// Terminal failure of a single check. Messages always carry the URL.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("URL does not match the expected GitHub Pages pattern {}: {url}", PAGES_SHAPE_HINT)]
    ShapeMismatch { url: String },

    /// Configuration was never completed; detected before any network call.
    #[error("URL contains placeholder values: {url}. Please replace {{your-website-url}} with actual values.")]
    Placeholder { url: String, token: String },

    /// URL cannot be used as an absolute http(s) URL.
    #[error("Invalid URL format: {url}. Please provide a valid absolute URL.")]
    InvalidUrl { url: String, reason: String },

    #[error("Expected HTTP 200 but received {status} for URL: {url}")]
    UnexpectedStatus { url: String, status: u32 },

    /// Non-200 while fetching the page for the content check.
    #[error("Cannot fetch HTML content. Expected HTTP 200 but received {status} for URL: {url}")]
    ContentUnavailable { url: String, status: u32 },

    #[error("Request timed out after {}s for URL: {url}", .timeout.as_secs_f64())]
    Timeout { url: String, timeout: Duration },

    #[error("Request failed for URL: {url}: {source}")]
    Unreachable {
        url: String,
        #[source]
        source: FetchError,
    },

    /// One entry per missing tag, in title, body, head order.
    #[error("{}", missing_tags_message(.url, .tags))]
    MissingTags { url: String, tags: Vec<RequiredTag> },
}

impl CheckError {
    /// Maps a fetch failure, rewriting malformed URLs into `InvalidUrl`.
    pub(crate) fn from_fetch(url: &str, err: FetchError) -> Self {
        let url = url.to_string();
        match err {
            FetchError::InvalidUrl { reason } => CheckError::InvalidUrl { url, reason },
            FetchError::Timeout(timeout) => CheckError::Timeout { url, timeout },
            source => CheckError::Unreachable { url, source },
        }
    }

    /// Coarse category for machine-readable reports.
    pub fn category(&self) -> &'static str {
        match self {
            CheckError::ShapeMismatch { .. } => "shape",
            CheckError::Placeholder { .. } => "configuration",
            CheckError::InvalidUrl { .. } => "invalid-url",
            CheckError::UnexpectedStatus { .. }
            | CheckError::ContentUnavailable { .. }
            | CheckError::Timeout { .. }
            | CheckError::Unreachable { .. } => "unreachable",
            CheckError::MissingTags { .. } => "missing-tag",
        }
    }

    /// HTTP status, when the failure came from a response.
    pub fn status(&self) -> Option<u32> {
        match self {
            CheckError::UnexpectedStatus { status, .. }
            | CheckError::ContentUnavailable { status, .. } => Some(*status),
            _ => None,
        }
    }
}

fn missing_tags_message(url: &str, tags: &[RequiredTag]) -> String {
    tags.iter()
        .map(|tag| format!("HTML does not contain <{}> tag. URL: {}", tag, url))
        .collect::<Vec<_>>()
        .join("; ")
}

//! Single-page HTTP GET.
//!
//! Uses the curl crate (libcurl) for one plain GET per check: no custom
//! headers, no body, no auth. Redirects are followed. The whole transfer is
//! bounded by `FetchSettings::timeout`, both inside curl and, for async
//! callers, around the blocking task.

mod classify;
mod error;

pub use classify::{classify_curl_error, validate_absolute_url};
pub use error::FetchError;

use std::time::Duration;

/// Per-check timeout used when nothing else is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const MAX_REDIRECTIONS: u32 = 10;

/// Knobs for a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    /// Upper bound for connect + transfer.
    pub timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Final response after redirects.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub status: u32,
    /// Response body decoded as UTF-8 (lossy).
    pub body: String,
}

/// Performs a GET and returns status and body.
///
/// Runs in the current thread; use [`fetch_page_async`] from async code.
pub fn fetch_page(url: &str, settings: &FetchSettings) -> Result<PageResponse, FetchError> {
    validate_absolute_url(url)?;

    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)
        .map_err(|e| classify_curl_error(e, settings.timeout))?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(MAX_REDIRECTIONS)?;
    easy.connect_timeout(settings.timeout)?;
    easy.timeout(settings.timeout)?;

    {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer
            .perform()
            .map_err(|e| classify_curl_error(e, settings.timeout))?;
    }

    let status = easy.response_code()?;
    tracing::debug!(url, status, bytes = body.len(), "GET finished");

    Ok(PageResponse {
        status,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}

/// Runs [`fetch_page`] on the blocking pool, bounded by `settings.timeout`.
pub async fn fetch_page_async(
    url: &str,
    settings: &FetchSettings,
) -> Result<PageResponse, FetchError> {
    let task = tokio::task::spawn_blocking({
        let url = url.to_string();
        let settings = *settings;
        move || fetch_page(&url, &settings)
    });

    match tokio::time::timeout(settings.timeout, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_err)) => Err(FetchError::Join(join_err.to_string())),
        Err(_) => Err(FetchError::Timeout(settings.timeout)),
    }
}

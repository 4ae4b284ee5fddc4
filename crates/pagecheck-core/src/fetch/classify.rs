//! Classify URL parse and curl errors into fetch error kinds.

use super::FetchError;
use std::time::Duration;
use url::Url;

/// Rejects anything that is not an absolute `http`/`https` URL with a host.
pub fn validate_absolute_url(raw: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(raw).map_err(|e| FetchError::InvalidUrl {
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(FetchError::InvalidUrl {
            reason: format!("unsupported scheme {:?}", parsed.scheme()),
        });
    }
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(FetchError::InvalidUrl {
            reason: "missing host".to_string(),
        });
    }
    Ok(parsed)
}

/// Classify a curl error: malformed/unsupported URLs and timeouts get their
/// own kinds, everything else is a transport failure. `timeout` is the
/// limit that was in force, reported back on timeouts.
pub fn classify_curl_error(e: curl::Error, timeout: Duration) -> FetchError {
    if e.is_url_malformed() || e.is_unsupported_protocol() {
        return FetchError::InvalidUrl {
            reason: e.to_string(),
        };
    }
    if e.is_operation_timedout() {
        return FetchError::Timeout(timeout);
    }
    FetchError::Transport(e)
}

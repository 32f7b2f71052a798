//! Shared HTTP plumbing for the service adapters

use sdg_application::ports::generation::GatewayError;
use std::time::Duration;

/// Build a client with a request timeout.
pub(crate) fn client(timeout: Duration) -> Result<reqwest::Client, GatewayError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| GatewayError::Other(format!("HTTP client: {e}")))
}

/// Map a transport failure onto the gateway error vocabulary.
pub(crate) fn transport_error(e: reqwest::Error) -> GatewayError {
    if e.is_timeout() {
        GatewayError::Timeout
    } else if e.is_connect() {
        GatewayError::ConnectionError(e.to_string())
    } else if e.is_decode() {
        GatewayError::InvalidResponse(e.to_string())
    } else {
        GatewayError::RequestFailed(e.to_string())
    }
}

/// `http://` is assumed when no scheme is given; trailing slashes dropped.
pub(crate) fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    }
}

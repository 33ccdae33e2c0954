//! # relay
//!
//! **Status Query Relay** — one outbound `GET /api/status` to the trading
//! backend, relayed back to the caller as-is.
//!
//! ## Upstream Contract
//! ```json
//! { "trading": true }
//! ```
//! Anything other than a 2xx carrying that exact shape is a failure. There is
//! no retry, no caching and no fallback value: the caller either gets the
//! upstream boolean or an error.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

/// Path of the status endpoint on the upstream service.
pub const STATUS_PATH: &str = "/api/status";

/// The one entity that crosses the edge boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// `true` while the backend's trading loop is active.
    pub trading: bool,
}

#[derive(Debug, Error)]
pub enum RelayError {
    /// Upstream answered, but not with a success status.
    #[error("Failed to fetch status from backend: HTTP {0}")]
    UpstreamUnavailable(StatusCode),

    /// Upstream could not be reached at all (refused, reset, DNS).
    #[error("Trading backend unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// Upstream answered 2xx with a body that is not `{ "trading": bool }`.
    #[error("Malformed status payload from backend: {0}")]
    Decode(#[source] reqwest::Error),
}

// ─── Fetch Status ─────────────────────────────────────────────────────────────

/// Query the upstream trading-status service and relay its flag unchanged.
pub async fn fetch_status(
    client: &reqwest::Client,
    upstream_url: &str,
) -> Result<StatusResponse, RelayError> {
    let url = format!("{upstream_url}{STATUS_PATH}");

    // ── HTTP GET ──────────────────────────────────────────────────────────────
    let response = client.get(&url).send().await.map_err(|e| {
        error!(error = %e, url = %url, "Trading backend unreachable");
        RelayError::Transport(e)
    })?;

    // ── HTTP Status ───────────────────────────────────────────────────────────
    if !response.status().is_success() {
        let status = response.status();
        error!(http_status = %status, url = %url, "Trading backend returned HTTP error");
        return Err(RelayError::UpstreamUnavailable(status));
    }

    // ── Parse Response ────────────────────────────────────────────────────────
    let status: StatusResponse = response.json().await.map_err(|e| {
        error!(error = %e, url = %url, "Status payload parse failed");
        RelayError::Decode(e)
    })?;

    debug!(trading = status.trading, "📡 [RELAY] Status relayed");

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_response_requires_a_boolean() {
        assert!(serde_json::from_str::<StatusResponse>(r#"{"trading":"yes"}"#).is_err());
        assert!(serde_json::from_str::<StatusResponse>(r#"{}"#).is_err());

        let parsed: StatusResponse = serde_json::from_str(r#"{"trading":false}"#).unwrap();
        assert!(!parsed.trading);
    }

    #[test]
    fn upstream_unavailable_names_the_status() {
        let err = RelayError::UpstreamUnavailable(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            err.to_string(),
            "Failed to fetch status from backend: HTTP 500 Internal Server Error"
        );
    }
}

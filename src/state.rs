//! # state
//!
//! Shared edge state: the upstream location and one pooled HTTP client.
//! Nothing here is mutable; every status query goes straight upstream.

use std::sync::Arc;

use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    /// reqwest Client shared by every request (connection pooling).
    pub http_client: reqwest::Client,

    /// Base URL of the trading backend, e.g. `http://127.0.0.1:8080`.
    pub upstream_url: String,
}

impl AppState {
    pub fn new(upstream_url: impl Into<String>) -> Self {
        Self {
            http_client:  reqwest::Client::new(),
            upstream_url: upstream_url.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.upstream_url.clone())
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state(config: &Config) -> SharedState {
    Arc::new(AppState::from_config(config))
}

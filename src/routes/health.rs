//! # routes::health

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

// ─── GET /api/health ──────────────────────────────────────────────────────────

/// Liveness of the edge itself. Does not contact the upstream.
pub async fn health_check(State(state): State<SharedState>) -> impl IntoResponse {
    Json(json!({
        "ok":       true,
        "upstream": state.upstream_url,
    }))
}

//! # routes::health

use axum::{extract::State, response::IntoResponse, Json};
use serde_json::json;

use crate::state::SharedState;

// ─── GET /api/health ──────────────────────────────────────────────────────────

pub async fn health_check(State(state): State<SharedState>) -> impl IntoResponse {
    let log_count = state.trade_logs.len();

    Json(json!({
        "ok":              true,
        "trading":         state.is_trading(),
        "log_count":       log_count,
        "account_balance": state.exchange.account_balance(),
    }))
}

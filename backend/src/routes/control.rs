//! # routes::control
//!
//! Trading controls and the status endpoint the dashboard edge relays.
//!
//! | Method | Path          | Description                          |
//! |--------|---------------|--------------------------------------|
//! | POST   | `/api/start`  | Start the trading loop               |
//! | POST   | `/api/stop`   | Stop the trading loop                |
//! | GET    | `/api/status` | `{ "trading": bool }` — nothing else |
//! | GET    | `/api/logs`   | Session trade log                    |

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

use crate::{error::AppError, state::SharedState};

/// Body of `GET /api/status`. Its shape is the relay contract: exactly one
/// boolean field.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub trading: bool,
}

// ─── POST /api/start ──────────────────────────────────────────────────────────

pub async fn start_trading(
    State(state): State<SharedState>,
) -> Result<impl IntoResponse, AppError> {
    let changed = state.start().await?;
    if !changed {
        tracing::debug!("Start requested while already trading");
    }

    Ok(Json(json!({
        "ok":      true,
        "trading": state.is_trading(),
        "message": "Trading started",
    })))
}

// ─── POST /api/stop ───────────────────────────────────────────────────────────

pub async fn stop_trading(State(state): State<SharedState>) -> impl IntoResponse {
    if !state.stop().await {
        tracing::debug!("Stop requested while not trading");
    }

    Json(json!({
        "ok":      true,
        "trading": state.is_trading(),
        "message": "Trading stopped",
    }))
}

// ─── GET /api/status ──────────────────────────────────────────────────────────

pub async fn get_status(State(state): State<SharedState>) -> Json<StatusBody> {
    Json(StatusBody { trading: state.is_trading() })
}

// ─── GET /api/logs ────────────────────────────────────────────────────────────

pub async fn get_logs(State(state): State<SharedState>) -> impl IntoResponse {
    let logs = state.logs();
    Json(json!({
        "ok":    true,
        "count": logs.len(),
        "logs":  logs,
    }))
}

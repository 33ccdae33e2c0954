//! # routes::backtest
//!
//! POST /api/backtest
//!
//! Body `{ "candles": [...] }` replays the given series; an empty body replays
//! the configured CSV (`BACKTEST_CSV`).

use axum::{body::Bytes, extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::info;

use crate::{
    engine::backtest::{load_candles, run_backtest},
    error::AppError,
    models::Candle,
    state::SharedState,
};

#[derive(Deserialize)]
pub struct BacktestRequest {
    /// Candle series, oldest first.
    pub candles: Vec<Candle>,
}

pub async fn backtest(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let candles = if body.iter().all(u8::is_ascii_whitespace) {
        load_candles(&state.config.backtest_csv)?
    } else {
        let req: BacktestRequest = serde_json::from_slice(&body)
            .map_err(|e| AppError::BadRequest(format!("invalid backtest body: {e}")))?;
        req.candles
    };

    let signals = run_backtest(&candles);
    info!(candles = candles.len(), signals = signals.len(), "📊 Backtest finished");

    Ok(Json(json!({
        "ok":      true,
        "count":   signals.len(),
        "signals": signals,
    })))
}

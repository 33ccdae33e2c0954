//! # VWAP Option Bot — Trading-Status Backend
//!
//! ```text
//!  ┌─────────────┐  GET  /api/status   ┌────────────────────────────┐
//!  │  Dashboard  │ ──────────────────▶ │ AppState                   │
//!  │  edge       │                     │ ├─ trading_active          │
//!  └─────────────┘                     │ ├─ trade_logs              │
//!                   POST /api/start    │ ├─ trading_task ──▶ loop ──┼──▶ StubExchange
//!  ┌─────────────┐  POST /api/stop     │ └─ exchange                │
//!  │  Operator   │ ──────────────────▶ └────────────────────────────┘
//!  └─────────────┘  POST /api/backtest 📊   GET /api/logs
//! ```

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod engine;
pub mod error;
pub mod exchange;
pub mod models;
pub mod routes;
pub mod state;

use routes::{
    backtest::backtest,
    control::{get_logs, get_status, start_trading, stop_trading},
    health::health_check,
};
use state::SharedState;

pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Trading Controls ──────────────────────────────────────────────────
        .route("/api/start",    post(start_trading))
        .route("/api/stop",     post(stop_trading))
        .route("/api/status",   get(get_status))
        .route("/api/logs",     get(get_logs))
        // ── Backtesting ───────────────────────────────────────────────────────
        .route("/api/backtest", post(backtest))
        // ── Health ────────────────────────────────────────────────────────────
        .route("/api/health",   get(health_check))
        // ── Middleware ────────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

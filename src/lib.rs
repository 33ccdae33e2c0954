//! # VWAP Dashboard — Edge Query Layer
//!
//! ```text
//!  ┌─────────────┐  GET /api/trpc/backend.status  ┌──────────────────┐  GET /api/status  ┌──────────────────┐
//!  │  Dashboard  │ ─────────────────────────────▶ │  Edge (this)     │ ─────────────────▶ │  vwap-option-bot │
//!  │  (browser)  │ ◀───── {trading: bool} ─────── │  typed procedures│ ◀── {trading} ──── │  backend         │
//!  └─────────────┘                                └──────────────────┘                    └──────────────────┘
//! ```
//!
//! The edge is a pass-through adapter: one inbound typed query maps onto one
//! outbound HTTP call, and the result or error is relayed without buffering,
//! retry or caching.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod procedures;
pub mod relay;
pub mod routes;
pub mod state;

use routes::{health::health_check, trpc::handle_query};
use state::SharedState;

/// Build the Axum router with every route and middleware attached.
pub fn build_router(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ── Typed procedures ──────────────────────────────────────────────────
        .route("/api/trpc/:paths", get(handle_query))
        // ── Health ────────────────────────────────────────────────────────────
        .route("/api/health",      get(health_check))
        // ── Middleware ────────────────────────────────────────────────────────
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

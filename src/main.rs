//! # VWAP Dashboard — edge binary
//!
//! ## Environment Variables
//!
//! | Variable       | Default                   | Description                     |
//! |----------------|---------------------------|---------------------------------|
//! | `BIND_ADDR`    | `0.0.0.0:3000`            | Address Axum listens on         |
//! | `UPSTREAM_URL` | `http://127.0.0.1:8080`   | Base URL of the trading backend |
//! | `RUST_LOG`     | `vwap_dashboard=debug`    | Tracing filter                  |

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vwap_dashboard::{build_router, config::Config, state::build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env (optional — CI/prod can use real env vars) ──────────────
    dotenvy::dotenv().ok();

    // ── 2. Initialise structured logging ─────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("vwap_dashboard=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!(
        r#"

  ╔═══════════════════════════════════════════════╗
  ║        VWAP DASHBOARD — Edge Query Layer      ║
  ║        Rust + Axum  ·  Typed Procedures       ║
  ╚═══════════════════════════════════════════════╝"#
    );

    // ── 3. Config + shared state ─────────────────────────────────────────────
    let config = Config::from_env().context("Failed to load config")?;
    let state = build_state(&config);

    info!(upstream = %config.upstream_url, "Relaying status queries upstream");

    // ── 4. Router ────────────────────────────────────────────────────────────
    let app = build_router(state);

    // ── 5. Bind & Serve ──────────────────────────────────────────────────────
    info!(addr = ?config.bind_addr, "🚀 Edge server starting");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

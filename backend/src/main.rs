//! # VWAP Option Bot — backend binary
//!
//! ## Environment Variables
//!
//! | Variable              | Default                 | Description                   |
//! |-----------------------|-------------------------|-------------------------------|
//! | `BIND_ADDR`           | `127.0.0.1:8080`        | Address Axum listens on       |
//! | `BACKTEST_CSV`        | `data/sample.csv`       | Candles for `/api/backtest`   |
//! | `TRADING_INTERVAL_MS` | `5000`                  | Trading loop period           |
//! | `RUST_LOG`            | `vwap_option_bot=debug` | Tracing filter                |

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vwap_option_bot::{build_router, config::Config, state::build_state};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ── 1. Load .env ──────────────────────────────────────────────────────────
    dotenvy::dotenv().ok();

    // ── 2. Structured logging ─────────────────────────────────────────────────
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::from_default_env()
                .add_directive("vwap_option_bot=debug".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!(r#"

  ╔═══════════════════════════════════════════════════════╗
  ║           VWAP OPTION BOT — Trading Backend           ║
  ║     Status · Controls · Strategies · Backtest         ║
  ╚═══════════════════════════════════════════════════════╝"#);

    // ── 3. Config + shared state ──────────────────────────────────────────────
    let config = Config::from_env().context("Failed to load config")?;
    let addr = config.bind_addr;
    let state = build_state(config);

    // ── 4. Router ─────────────────────────────────────────────────────────────
    let app = build_router(state);

    // ── 5. Bind & Serve ───────────────────────────────────────────────────────
    info!(?addr, "🚀 Trading backend starting");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

//! # state
//!
//! The trading domain shared by every handler: the `trading` flag that
//! `GET /api/status` reports, the session trade log and the live trading loop.
//!
//! * `AtomicBool` flag → status reads never wait on a lock.
//! * `Mutex<Option<JoinHandle>>` → start/stop transitions are serialised, so
//!   at most one trading loop ever runs.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use tokio::{sync::Mutex, task::JoinHandle};
use tracing::{info, warn};

use crate::{
    config::Config,
    engine::trading_loop,
    error::AppError,
    exchange::{ExchangeApi, StubExchange},
    models::{TradeJournal, TradeLog},
};

// ─── AppState ─────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct AppState {
    /// `true` between a successful start and the next stop.
    pub trading_active: Arc<AtomicBool>,

    /// Every start / stop / signal this session, oldest first.
    pub trade_logs: TradeJournal,

    /// Handle of the running trading loop (None while stopped).
    trading_task: Arc<Mutex<Option<JoinHandle<()>>>>,

    pub exchange: Arc<dyn ExchangeApi>,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, exchange: Arc<dyn ExchangeApi>) -> Self {
        Self::with_journal(config, exchange, TradeJournal::default())
    }

    /// Build around an existing journal, e.g. one the exchange also writes to.
    pub fn with_journal(
        config: Config,
        exchange: Arc<dyn ExchangeApi>,
        journal: TradeJournal,
    ) -> Self {
        Self {
            trading_active: Arc::new(AtomicBool::new(false)),
            trade_logs:     journal,
            trading_task:   Arc::new(Mutex::new(None)),
            exchange,
            config:         Arc::new(config),
        }
    }

    // ── Trading Controls ──────────────────────────────────────────────────────

    /// Start trading. Returns `false` if trading was already active.
    pub async fn start(self: &Arc<Self>) -> Result<bool, AppError> {
        let mut task = self.trading_task.lock().await;
        if self.is_trading() {
            return Ok(false);
        }

        if !self.exchange.authenticate_broker() {
            warn!("❌ Broker authentication failed — trading not started");
            return Err(AppError::Broker("Broker authentication failed".into()));
        }

        self.trading_active.store(true, Ordering::SeqCst);
        self.push_log(TradeLog::started());
        *task = Some(tokio::spawn(trading_loop::run(Arc::clone(self))));

        info!(interval = ?self.config.trading_interval, "▶️ Trading started");
        Ok(true)
    }

    /// Stop trading. Returns `false` if trading was not active.
    ///
    /// The loop task is aborted and awaited before the stop entry is written,
    /// so no signal can land after it.
    pub async fn stop(&self) -> bool {
        let mut task = self.trading_task.lock().await;
        if !self.is_trading() {
            return false;
        }

        self.trading_active.store(false, Ordering::SeqCst);
        if let Some(handle) = task.take() {
            handle.abort();
            // Err(cancelled) is the expected outcome
            let _ = handle.await;
        }
        self.push_log(TradeLog::stopped());

        info!("⏹️ Trading stopped");
        true
    }

    #[inline]
    pub fn is_trading(&self) -> bool {
        self.trading_active.load(Ordering::SeqCst)
    }

    // ── Trade Log ─────────────────────────────────────────────────────────────

    pub fn push_log(&self, entry: TradeLog) {
        self.trade_logs.push(entry);
    }

    /// Snapshot of the trade log (cloned out so the lock is released).
    pub fn logs(&self) -> Vec<TradeLog> {
        self.trade_logs.snapshot()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::stub(Config::default())
    }
}

impl AppState {
    /// Paper-trading state: a `StubExchange` whose `log_trade` feeds the
    /// session log.
    fn stub(config: Config) -> Self {
        let journal = TradeJournal::default();
        let exchange = StubExchange::new().with_journal(journal.clone());
        Self::with_journal(config, Arc::new(exchange), journal)
    }
}

/// Convenience type alias
pub type SharedState = Arc<AppState>;

pub fn build_state(config: Config) -> SharedState {
    Arc::new(AppState::stub(config))
}

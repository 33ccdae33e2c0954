//! # exchange
//!
//! Broker / market-data boundary. Only a stub implementation exists: no order
//! is ever routed to a real broker.

use tracing::info;

use crate::models::{Candle, OptionContract, TradeJournal, TradeLog};

/// Everything the trading loop needs from a broker.
pub trait ExchangeApi: Send + Sync {
    /// Current candle history for the traded symbol, oldest first.
    fn fetch_candles(&self) -> Vec<Candle>;

    /// Establish (or verify) the broker session.
    fn authenticate_broker(&self) -> bool;

    /// Cash balance available to the account.
    fn account_balance(&self) -> f64;

    /// Option contracts currently listed for the traded symbol.
    fn get_option_chain(&self) -> Vec<OptionContract>;

    /// Place an order for `amount` contracts. `true` when the broker accepts it.
    fn submit_order(&self, contract: &OptionContract, amount: f64) -> bool;

    /// Record a trade event with the broker's journal.
    fn log_trade(&self, trade: &TradeLog);
}

/// Paper broker with a fixed candle feed.
#[derive(Debug, Clone)]
pub struct StubExchange {
    candles:       Vec<Candle>,
    authenticated: bool,
    balance:       f64,
    journal:       TradeJournal,
}

impl StubExchange {
    pub const DEFAULT_BALANCE: f64 = 10_000.0;

    pub fn new() -> Self {
        Self {
            candles:       Vec::new(),
            authenticated: true,
            balance:       Self::DEFAULT_BALANCE,
            journal:       TradeJournal::default(),
        }
    }

    /// Serve `candles` from every `fetch_candles` call.
    pub fn with_candles(mut self, candles: Vec<Candle>) -> Self {
        self.candles = candles;
        self
    }

    /// Make `authenticate_broker` fail, to exercise the start-up guard.
    pub fn rejecting_auth(mut self) -> Self {
        self.authenticated = false;
        self
    }

    /// Write `log_trade` entries into `journal` (normally the session log).
    pub fn with_journal(mut self, journal: TradeJournal) -> Self {
        self.journal = journal;
        self
    }
}

impl Default for StubExchange {
    fn default() -> Self {
        Self::new()
    }
}

impl ExchangeApi for StubExchange {
    fn fetch_candles(&self) -> Vec<Candle> {
        self.candles.clone()
    }

    fn authenticate_broker(&self) -> bool {
        self.authenticated
    }

    fn account_balance(&self) -> f64 {
        self.balance
    }

    fn get_option_chain(&self) -> Vec<OptionContract> {
        Vec::new()
    }

    fn submit_order(&self, contract: &OptionContract, amount: f64) -> bool {
        if !(amount.is_finite() && amount > 0.0) {
            return false;
        }
        info!(symbol = %contract.symbol, amount, "🎭 [STUB] Paper order accepted");
        true
    }

    fn log_trade(&self, trade: &TradeLog) {
        self.journal.push(trade.clone());
    }
}

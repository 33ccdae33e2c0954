//! # models::trade_log
//!
//! Defines [`TradeLog`] — one entry in the session's append-only trade log,
//! surfaced by `GET /api/logs`.

use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeAction {
    Start,
    Stop,
    /// A strategy fired on the live candle feed.
    Signal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeLog {
    pub id:        Uuid,
    pub timestamp: DateTime<Utc>,
    pub action:    TradeAction,
    pub details:   String,
}

impl TradeLog {
    pub fn new(action: TradeAction, details: impl Into<String>) -> Self {
        Self {
            id:        Uuid::new_v4(),
            timestamp: Utc::now(),
            action,
            details:   details.into(),
        }
    }

    pub fn started() -> Self {
        Self::new(TradeAction::Start, "Trading started")
    }

    pub fn stopped() -> Self {
        Self::new(TradeAction::Stop, "Trading stopped")
    }

    pub fn signal(strategy: &str, candle_timestamp: i64) -> Self {
        Self::new(TradeAction::Signal, signal_message(strategy, candle_timestamp))
    }
}

/// `"{strategy} triggered at {timestamp}"`, shared by live signals and backtests.
pub fn signal_message(strategy: &str, candle_timestamp: i64) -> String {
    format!("{strategy} triggered at {candle_timestamp}")
}

// ─── TradeJournal ─────────────────────────────────────────────────────────────

/// Shared handle on the session trade log.
///
/// Writers include the synchronous `ExchangeApi::log_trade`, so the lock is a
/// `std` one and is never held across an `.await`.
#[derive(Debug, Clone, Default)]
pub struct TradeJournal {
    entries: Arc<RwLock<Vec<TradeLog>>>,
}

impl TradeJournal {
    pub fn push(&self, entry: TradeLog) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Copy of every entry, oldest first.
    pub fn snapshot(&self) -> Vec<TradeLog> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.entries.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_serializes_screaming_snake() {
        let log = TradeLog::started();
        let json = serde_json::to_value(&log).unwrap();
        assert_eq!(json["action"], "START");
        assert_eq!(json["details"], "Trading started");
    }

    #[test]
    fn signal_message_format() {
        let log = TradeLog::signal("Breakout", 42);
        assert_eq!(log.action, TradeAction::Signal);
        assert_eq!(log.details, "Breakout triggered at 42");
    }

    #[test]
    fn journal_clones_share_entries() {
        let journal = TradeJournal::default();
        let handle = journal.clone();

        handle.push(TradeLog::started());
        journal.push(TradeLog::stopped());

        let actions: Vec<TradeAction> = journal.snapshot().iter().map(|l| l.action).collect();
        assert_eq!(actions, vec![TradeAction::Start, TradeAction::Stop]);
        assert_eq!(handle.len(), 2);
    }
}

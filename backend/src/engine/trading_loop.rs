//! # engine::trading_loop
//!
//! **Live loop** — spawned by `AppState::start`, polls the exchange on a fixed
//! interval and logs every strategy that fires on a new candle.
//!
//! ```text
//! every TRADING_INTERVAL_MS, while trading_active:
//!   1. fetch candles from the exchange
//!   2. skip if the newest candle was already evaluated
//!   3. run all strategies → one SIGNAL log per trigger
//! ```

use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, info};

use crate::{
    engine::strategies::StrategyRunner,
    models::{Candle, TradeLog},
    state::SharedState,
};

pub async fn run(state: SharedState) {
    let runner = StrategyRunner::with_defaults();
    let mut ticker = interval(state.config.trading_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut last_evaluated: Option<i64> = None;

    info!("🔁 Trading loop running");

    loop {
        ticker.tick().await;
        if !state.is_trading() {
            break;
        }

        let candles = state.exchange.fetch_candles();
        for entry in evaluate(&runner, &candles, &mut last_evaluated) {
            info!(signal = %entry.details, "📈 Strategy signal");
            state.push_log(entry);
        }
    }

    info!("🔁 Trading loop exited");
}

/// Run the strategies once over `candles`, unless the newest candle has
/// already been evaluated.
pub fn evaluate(
    runner: &StrategyRunner,
    candles: &[Candle],
    last_evaluated: &mut Option<i64>,
) -> Vec<TradeLog> {
    let Some(latest) = candles.last().map(|c| c.timestamp) else {
        debug!("No candles from exchange yet");
        return Vec::new();
    };
    if *last_evaluated == Some(latest) {
        return Vec::new();
    }
    *last_evaluated = Some(latest);

    runner
        .run_on_slice(candles)
        .iter()
        .map(|name| TradeLog::signal(name, latest))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(timestamp: i64, close: f64) -> Candle {
        Candle { timestamp, open: close, high: close, low: close, close, volume: 1.0 }
    }

    #[test]
    fn same_candle_is_evaluated_once() {
        let runner = StrategyRunner::with_defaults();
        let candles = vec![candle(1, 10.0)];
        let mut last = None;

        let first = evaluate(&runner, &candles, &mut last);
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].details, "Breakout triggered at 1");

        assert!(evaluate(&runner, &candles, &mut last).is_empty());
    }

    #[test]
    fn empty_feed_produces_nothing() {
        let runner = StrategyRunner::with_defaults();
        let mut last = None;
        assert!(evaluate(&runner, &[], &mut last).is_empty());
        assert_eq!(last, None);
    }
}

//! # engine::backtest
//!
//! Replays a candle series bar by bar over a growing history and records
//! which strategies would have fired on each bar.

use std::path::Path;

use crate::{
    engine::strategies::StrategyRunner,
    error::AppError,
    models::{trade_log::signal_message, Candle},
};

/// Read candles from a CSV with header `timestamp,open,high,low,close,volume`.
pub fn load_candles(path: &Path) -> Result<Vec<Candle>, AppError> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| AppError::Data(format!("failed to open {}: {e}", path.display())))?;

    reader
        .deserialize()
        .collect::<Result<Vec<Candle>, _>>()
        .map_err(|e| AppError::Data(format!("CSV parse error in {}: {e}", path.display())))
}

/// `"{strategy} triggered at {timestamp}"` for every trigger, in bar order.
pub fn run_backtest(candles: &[Candle]) -> Vec<String> {
    let runner = StrategyRunner::with_defaults();

    (0..candles.len())
        .flat_map(|i| {
            let history = &candles[..=i];
            let timestamp = candles[i].timestamp;
            runner
                .run_on_slice(history)
                .into_iter()
                .map(move |name| signal_message(&name, timestamp))
        })
        .collect()
}

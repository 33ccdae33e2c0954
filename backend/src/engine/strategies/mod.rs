//! # engine::strategies
//!
//! Signal strategies and the runner that evaluates them in registration order.

use crate::{exchange::ExchangeApi, models::Candle};

pub mod breakout;
pub mod vwap_bounce;

pub use breakout::Breakout;
pub use vwap_bounce::VwapBounce;

/// A stateless signal check over a candle history (oldest first).
pub trait Strategy: Send + Sync {
    fn name(&self) -> &str;
    fn check_signal(&self, candles: &[Candle]) -> bool;
}

#[derive(Default)]
pub struct StrategyRunner {
    strategies: Vec<Box<dyn Strategy>>,
}

impl StrategyRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// The production set: VWAP Bounce, then Breakout.
    pub fn with_defaults() -> Self {
        let mut runner = Self::new();
        runner.add_strategy(Box::new(VwapBounce));
        runner.add_strategy(Box::new(Breakout));
        runner
    }

    pub fn add_strategy(&mut self, strategy: Box<dyn Strategy>) {
        self.strategies.push(strategy);
    }

    /// Fetch the current candles from the exchange and evaluate them.
    pub fn run(&self, api: &dyn ExchangeApi) -> Vec<String> {
        self.run_on_slice(&api.fetch_candles())
    }

    /// Names of every strategy that fires on `candles`.
    pub fn run_on_slice(&self, candles: &[Candle]) -> Vec<String> {
        self.strategies
            .iter()
            .filter(|s| s.check_signal(candles))
            .map(|s| s.name().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exchange::StubExchange;

    struct Always;

    impl Strategy for Always {
        fn name(&self) -> &str {
            "Always"
        }

        fn check_signal(&self, _candles: &[Candle]) -> bool {
            true
        }
    }

    #[test]
    fn runner_reports_in_registration_order() {
        let mut runner = StrategyRunner::with_defaults();
        runner.add_strategy(Box::new(Always));

        let single = [Candle { timestamp: 1, open: 1.0, high: 2.0, low: 0.5, close: 1.5, volume: 10.0 }];
        assert_eq!(runner.run_on_slice(&single), vec!["Breakout", "Always"]);
    }

    #[test]
    fn run_against_empty_stub_feed() {
        let runner = StrategyRunner::with_defaults();
        assert!(runner.run(&StubExchange::default()).is_empty());
    }
}

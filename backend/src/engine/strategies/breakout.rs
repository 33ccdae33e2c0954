//! # engine::strategies::breakout
//!
//! Fires when the latest close clears the highest high of the preceding
//! five bars.

use crate::models::Candle;

use super::Strategy;

/// Number of preceding bars the breakout level is taken from.
const LOOKBACK: usize = 5;

pub struct Breakout;

impl Strategy for Breakout {
    fn name(&self) -> &str {
        "Breakout"
    }

    fn check_signal(&self, candles: &[Candle]) -> bool {
        let Some((last, previous)) = candles.split_last() else {
            return false;
        };
        // An empty lookback leaves the level at -inf, so a lone bar fires.
        let prev_high = previous
            .iter()
            .rev()
            .take(LOOKBACK)
            .fold(f64::NEG_INFINITY, |max, c| max.max(c.high));
        last.close > prev_high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(timestamp: i64, high: f64, close: f64) -> Candle {
        Candle { timestamp, open: close, high, low: close - 1.0, close, volume: 1.0 }
    }

    #[test]
    fn empty_history_never_fires() {
        assert!(!Breakout.check_signal(&[]));
    }

    #[test]
    fn single_candle_fires() {
        assert!(Breakout.check_signal(&[candle(1, 10.0, 9.0)]));
    }

    #[test]
    fn close_above_recent_high_fires() {
        let candles = vec![candle(1, 10.0, 9.5), candle(2, 10.5, 10.0), candle(3, 11.0, 10.8)];
        assert!(Breakout.check_signal(&candles));
    }

    #[test]
    fn close_at_or_below_recent_high_is_quiet() {
        let candles = vec![candle(1, 10.0, 9.5), candle(2, 10.5, 10.0), candle(3, 10.6, 10.5)];
        assert!(!Breakout.check_signal(&candles));
    }

    #[test]
    fn highs_older_than_five_bars_are_ignored() {
        let mut candles = vec![candle(1, 50.0, 49.0)];
        for ts in 2..=6 {
            candles.push(candle(ts, 10.0, 9.0));
        }
        candles.push(candle(7, 12.0, 11.0));
        assert!(Breakout.check_signal(&candles));
    }
}

//! # engine::strategies::vwap_bounce
//!
//! Fires when price is stretched below VWAP after three consecutive red bars.

use crate::{
    engine::indicators::{calculate_vwap, is_three_red_candles},
    models::Candle,
};

use super::Strategy;

pub struct VwapBounce;

impl Strategy for VwapBounce {
    fn name(&self) -> &str {
        "VWAP Bounce"
    }

    fn check_signal(&self, candles: &[Candle]) -> bool {
        match candles.last() {
            Some(last) if candles.len() >= 3 => {
                last.close < calculate_vwap(candles) && is_three_red_candles(candles)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candle(timestamp: i64, open: f64, high: f64, low: f64, close: f64) -> Candle {
        Candle { timestamp, open, high, low, close, volume: 1000.0 }
    }

    #[test]
    fn fires_below_vwap_after_three_reds() {
        let candles = vec![
            candle(1, 100.0, 101.0, 99.0, 100.5),
            candle(2, 100.5, 101.0, 100.0, 100.8),
            candle(3, 100.8, 101.0, 99.5, 100.0),
            candle(4, 100.0, 100.2, 99.0, 99.5),
            candle(5, 99.5, 99.6, 98.5, 98.8),
        ];
        assert!(VwapBounce.check_signal(&candles));
    }

    #[test]
    fn quiet_with_fewer_than_three_candles() {
        let candles = vec![candle(1, 10.0, 11.0, 8.0, 9.0), candle(2, 9.0, 10.0, 7.0, 8.0)];
        assert!(!VwapBounce.check_signal(&candles));
        assert!(!VwapBounce.check_signal(&[]));
    }

    #[test]
    fn quiet_when_close_is_above_vwap() {
        // three reds, but the last close sits above the session VWAP
        let candles = vec![
            candle(1, 90.0, 91.0, 89.0, 90.0),
            candle(2, 90.0, 91.0, 89.0, 90.0),
            candle(3, 110.0, 111.0, 108.0, 109.0),
            candle(4, 109.0, 110.0, 107.0, 108.0),
            candle(5, 108.0, 109.0, 106.0, 107.0),
        ];
        assert!(!VwapBounce.check_signal(&candles));
    }
}

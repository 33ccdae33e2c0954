//! # models::candle
//!
//! Defines [`Candle`], one OHLCV bar as delivered by the exchange or read from
//! a backtest CSV (`timestamp,open,high,low,close,volume`).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    /// Bar identifier / epoch timestamp as supplied by the source.
    pub timestamp: i64,
    pub open:      f64,
    pub high:      f64,
    pub low:       f64,
    pub close:     f64,
    pub volume:    f64,
}

impl Candle {
    /// `(high + low + close) / 3`, the price VWAP weights by volume.
    #[inline]
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// A red (bearish) bar closes below its open.
    #[inline]
    pub fn is_red(&self) -> bool {
        self.close < self.open
    }
}

//! # engine::indicators
//!
//! Price-action helpers shared by the strategies.

use crate::models::Candle;

/// Volume-weighted average of each bar's typical price.
///
/// Returns `0.0` when the slice carries no volume (including an empty slice).
pub fn calculate_vwap(candles: &[Candle]) -> f64 {
    let (pv_sum, vol_sum) = candles.iter().fold((0.0, 0.0), |(pv, vol), c| {
        (pv + c.typical_price() * c.volume, vol + c.volume)
    });

    if vol_sum == 0.0 {
        0.0
    } else {
        pv_sum / vol_sum
    }
}

/// `true` when there are at least three bars and the last three are all red.
pub fn is_three_red_candles(candles: &[Candle]) -> bool {
    candles.len() >= 3 && candles[candles.len() - 3..].iter().all(Candle::is_red)
}

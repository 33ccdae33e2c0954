//! # models::option_contract
//!
//! Defines [`OptionContract`], one listed option as returned by the broker's
//! option chain and accepted by `ExchangeApi::submit_order`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Call,
    Put,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionContract {
    /// OCC symbol, e.g. `"SPY230616C00400000"`.
    pub symbol:      String,
    pub strike:      f64,
    /// Expiry date, serialized as `YYYY-MM-DD`.
    pub expiry:      NaiveDate,
    pub option_type: OptionType,
}

pub mod candle;
pub mod option_contract;
pub mod trade_log;

pub use candle::Candle;
pub use option_contract::{OptionContract, OptionType};
pub use trade_log::{TradeAction, TradeJournal, TradeLog};

pub mod backtest;
pub mod indicators;
pub mod strategies;
pub mod trading_loop;

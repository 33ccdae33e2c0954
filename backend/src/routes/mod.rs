pub mod backtest;
pub mod control;
pub mod health;

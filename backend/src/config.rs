//! # config — Backend configuration from environment variables
//!
//! | Variable              | Default           | Description                          |
//! |-----------------------|-------------------|--------------------------------------|
//! | `BIND_ADDR`           | `127.0.0.1:8080`  | Address Axum listens on              |
//! | `BACKTEST_CSV`        | `data/sample.csv` | Candle file used by `/api/backtest`  |
//! | `TRADING_INTERVAL_MS` | `5000`            | Period of the live trading loop      |

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use anyhow::{bail, Context};

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr:        SocketAddr,
    /// CSV file replayed when `/api/backtest` is called without candles.
    pub backtest_csv:     PathBuf,
    /// How often the trading loop polls the exchange for candles.
    pub trading_interval: Duration,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| "127.0.0.1:8080".to_string())
            .parse()
            .context("BIND_ADDR must be a socket address, e.g. 127.0.0.1:8080")?;

        let interval_ms: u64 = lookup("TRADING_INTERVAL_MS")
            .unwrap_or_else(|| "5000".to_string())
            .parse()
            .context("TRADING_INTERVAL_MS must be a number")?;
        if interval_ms == 0 {
            bail!("TRADING_INTERVAL_MS must be greater than zero");
        }

        Ok(Self {
            bind_addr,
            backtest_csv: lookup("BACKTEST_CSV")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/sample.csv")),
            trading_interval: Duration::from_millis(interval_ms),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr:        SocketAddr::from(([127, 0, 0, 1], 8080)),
            backtest_csv:     PathBuf::from("data/sample.csv"),
            trading_interval: Duration::from_millis(5000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_dashboard_upstream() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.backtest_csv, PathBuf::from("data/sample.csv"));
        assert_eq!(config.trading_interval, Duration::from_secs(5));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let result = Config::from_lookup(|key| {
            (key == "TRADING_INTERVAL_MS").then(|| "0".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn non_numeric_interval_is_rejected() {
        let result = Config::from_lookup(|key| {
            (key == "TRADING_INTERVAL_MS").then(|| "fast".to_string())
        });
        assert!(result.is_err());
    }
}

//! # config — Edge configuration from environment variables
//!
//! | Variable       | Default                 | Description                        |
//! |----------------|-------------------------|------------------------------------|
//! | `BIND_ADDR`    | `0.0.0.0:3000`          | Address Axum listens on            |
//! | `UPSTREAM_URL` | `http://127.0.0.1:8080` | Base URL of the trading backend    |

use std::net::SocketAddr;

use anyhow::Context;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_UPSTREAM_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone)]
pub struct Config {
    /// Address the edge query layer binds to.
    pub bind_addr: SocketAddr,
    /// Base URL of the upstream trading-status service, without trailing `/`.
    pub upstream_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (the process env in
    /// production, a fixed map in tests).
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be a socket address, e.g. 0.0.0.0:3000")?;

        let upstream_url = lookup("UPSTREAM_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_UPSTREAM_URL.to_string());

        let parsed = reqwest::Url::parse(&upstream_url)
            .with_context(|| format!("UPSTREAM_URL is not a valid URL (got '{upstream_url}')"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("UPSTREAM_URL must use http:// or https:// (got '{upstream_url}')");
        }
        if parsed.host_str().map_or(true, str::is_empty) {
            anyhow::bail!("UPSTREAM_URL must name a host (got '{upstream_url}')");
        }

        Ok(Self {
            bind_addr,
            upstream_url: upstream_url.trim_end_matches('/').to_string(),
        })
    }
}

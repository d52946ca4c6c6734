use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use pricewatch_market_data::provider::{coingecko, yahoo};

pub struct Config {
    pub listen_addr: SocketAddr,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub static_dir: String,
    pub log_format: String,
    pub coingecko_base_url: String,
    pub yahoo_base_url: String,
    pub upstream_timeout: Duration,
    pub cache_ttl: Duration,
    pub cache_capacity: usize,
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup; missing keys take defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let listen_addr: SocketAddr = lookup("PW_LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:5000".to_string())
            .parse()
            .context("Invalid PW_LISTEN_ADDR")?;
        let cors_allow = lookup("PW_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let parse_u64 = |key: &str, default: u64| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };
        let timeout_ms = parse_u64("PW_REQUEST_TIMEOUT_MS", 30_000);
        let upstream_timeout_secs = parse_u64("PW_UPSTREAM_TIMEOUT_SECS", 10);
        let cache_ttl_secs = parse_u64("PW_CACHE_TTL_SECS", 30);
        let cache_capacity = parse_u64("PW_CACHE_CAPACITY", 100) as usize;

        Ok(Self {
            listen_addr,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            static_dir: lookup("PW_STATIC_DIR").unwrap_or_else(|| "static".into()),
            log_format: lookup("PW_LOG_FORMAT").unwrap_or_else(|| "text".into()),
            coingecko_base_url: lookup("PW_COINGECKO_BASE_URL")
                .unwrap_or_else(|| coingecko::DEFAULT_BASE_URL.into()),
            yahoo_base_url: lookup("PW_YAHOO_BASE_URL")
                .unwrap_or_else(|| yahoo::DEFAULT_BASE_URL.into()),
            upstream_timeout: Duration::from_secs(upstream_timeout_secs),
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_capacity,
        })
    }
}

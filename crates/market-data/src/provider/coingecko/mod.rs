//! CoinGecko market data provider.
//!
//! Prices Bitcoin in USD through two public endpoints:
//! - `/simple/price` for the current price, 24h change, and market cap
//! - `/coins/bitcoin/market_chart` for the price history

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use tracing::debug;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Instrument, PriceQuote};
use crate::provider::http::{build_client, get_json, join_url};
use crate::provider::PriceProvider;

use models::{MarketChartResponse, SimplePriceResponse};

/// Provider ID constant
const PROVIDER_ID: &str = "COINGECKO";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";

/// CoinGecko coin id for Bitcoin
const COIN_ID: &str = "bitcoin";

/// CoinGecko price provider for Bitcoin.
///
/// # Example
///
/// ```ignore
/// use pricewatch_market_data::CoinGeckoProvider;
///
/// let provider = CoinGeckoProvider::new(Duration::from_secs(10));
/// let quote = provider.fetch_current().await?;
/// ```
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Create a provider against the public API.
    pub fn new(timeout: Duration) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Create a provider against a custom API root (mirrors, tests).
    pub fn with_base_url(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: build_client(timeout),
            base_url: base_url.into(),
        }
    }

    /// Normalize a `/simple/price` payload into a quote.
    fn quote_from_simple_price(
        mut response: SimplePriceResponse,
    ) -> Result<PriceQuote, MarketDataError> {
        let coin = response
            .remove(COIN_ID)
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, COIN_ID))?;

        let price = coin
            .usd
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, "usd"))?;
        let change = coin
            .usd_24h_change
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, "usd_24h_change"))?;

        Ok(PriceQuote::new(Instrument::Bitcoin, price, change)
            .with_market_cap(coin.usd_market_cap.unwrap_or(0.0)))
    }

    /// Normalize a `/market_chart` payload into a series.
    fn series_from_market_chart(
        response: MarketChartResponse,
    ) -> Result<HistoricalSeries, MarketDataError> {
        let points = response
            .prices
            .into_iter()
            .map(|(millis, price)| Ok((millis_to_utc(millis)?, price)))
            .collect::<Result<Vec<_>, MarketDataError>>()?;

        Ok(HistoricalSeries::from_points(points))
    }

    /// Sampling interval requested from the market chart endpoint.
    fn chart_interval(days: u32) -> &'static str {
        if days > 1 {
            "daily"
        } else {
            "hourly"
        }
    }
}

fn millis_to_utc(millis: f64) -> Result<DateTime<Utc>, MarketDataError> {
    Utc.timestamp_millis_opt(millis as i64)
        .single()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid timestamp: {}", millis),
        })
}

#[async_trait]
impl PriceProvider for CoinGeckoProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn instrument(&self) -> Instrument {
        Instrument::Bitcoin
    }

    async fn fetch_current(&self) -> Result<PriceQuote, MarketDataError> {
        let url = join_url(&self.base_url, "simple/price");
        let request = self.client.get(&url).query(&[
            ("ids", COIN_ID),
            ("vs_currencies", "usd"),
            ("include_24hr_change", "true"),
            ("include_market_cap", "true"),
        ]);

        let response: SimplePriceResponse = get_json(request, PROVIDER_ID).await?;
        let quote = Self::quote_from_simple_price(response)?;
        debug!("Fetched {} price {} from {}", quote.symbol, quote.price, PROVIDER_ID);
        Ok(quote)
    }

    async fn fetch_historical(&self, days: u32) -> Result<HistoricalSeries, MarketDataError> {
        let url = join_url(&self.base_url, &format!("coins/{}/market_chart", COIN_ID));
        let days_param = days.to_string();
        let request = self.client.get(&url).query(&[
            ("vs_currency", "usd"),
            ("days", days_param.as_str()),
            ("interval", Self::chart_interval(days)),
        ]);

        let response: MarketChartResponse = get_json(request, PROVIDER_ID).await?;
        let series = Self::series_from_market_chart(response)?;
        debug!("Fetched {} BTC history points over {} days", series.len(), days);
        Ok(series)
    }
}

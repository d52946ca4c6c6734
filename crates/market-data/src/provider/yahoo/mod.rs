//! Yahoo Finance chart provider.
//!
//! This provider uses the public `v8/finance/chart` endpoint to price the
//! S&P 500 index (`^GSPC`). The same endpoint serves the current price (via the
//! session metadata of a two-day range) and the price history (via the candle
//! arrays of a `{days}d` range).

mod models;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::{header, Client};
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Instrument, PriceQuote};
use crate::provider::http::{build_client, get_json, join_url, BROWSER_USER_AGENT};
use crate::provider::PriceProvider;

use models::{YahooChartResponse, YahooChartResult};

/// Provider ID constant
const PROVIDER_ID: &str = "YAHOO";

/// Public API root
pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";

/// Yahoo ticker for the S&P 500 index
const INDEX_TICKER: &str = "^GSPC";

// ============================================================================
// Yahoo Chart Provider
// ============================================================================

/// Yahoo Finance chart provider for the S&P 500 index.
pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
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

    // ========================================================================
    // Requests
    // ========================================================================

    async fn fetch_chart(
        &self,
        interval: &str,
        range: &str,
    ) -> Result<YahooChartResult, MarketDataError> {
        let url = join_url(
            &self.base_url,
            &format!("v8/finance/chart/{}", encode(INDEX_TICKER)),
        );
        let request = self
            .client
            .get(&url)
            .header(header::USER_AGENT, BROWSER_USER_AGENT)
            .query(&[("interval", interval), ("range", range)]);

        let response: YahooChartResponse = get_json(request, PROVIDER_ID).await?;
        Self::first_result(response)
    }

    /// Unwrap the first chart result, surfacing an in-payload error object.
    fn first_result(response: YahooChartResponse) -> Result<YahooChartResult, MarketDataError> {
        if let Some(error) = response.chart.error {
            let message = error
                .description
                .or(error.code)
                .unwrap_or_else(|| "Unknown chart error".to_string());
            warn!("Yahoo chart error for {}: {}", INDEX_TICKER, message);
            return Err(MarketDataError::ProviderError {
                provider: PROVIDER_ID.to_string(),
                message,
            });
        }

        response
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, "chart.result"))
    }

    // ========================================================================
    // Normalization
    // ========================================================================

    /// Build the current quote from session metadata.
    fn quote_from_result(result: &YahooChartResult) -> Result<PriceQuote, MarketDataError> {
        let current = result
            .meta
            .regular_market_price
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, "regularMarketPrice"))?;
        let prev_close = result
            .meta
            .chart_previous_close
            .ok_or_else(|| MarketDataError::missing(PROVIDER_ID, "chartPreviousClose"))?;

        let change = percent_change(current, prev_close)?;

        Ok(PriceQuote::new(Instrument::Sp500, current, change).with_prev_close(prev_close))
    }

    /// Build the series from candle arrays, dropping candles with a null close.
    fn series_from_result(result: YahooChartResult) -> Result<HistoricalSeries, MarketDataError> {
        let closes = result
            .indicators
            .and_then(|indicators| indicators.quote.into_iter().next())
            .map(|quote| quote.close)
            .unwrap_or_default();

        let points = result
            .timestamp
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| close.map(|price| (ts, price)))
            .map(|(ts, price)| Ok((seconds_to_utc(ts)?, price)))
            .collect::<Result<Vec<_>, MarketDataError>>()?;

        Ok(HistoricalSeries::from_points(points))
    }

    /// Candle interval for a history request.
    fn chart_interval(days: u32) -> &'static str {
        if days > 1 {
            "1d"
        } else {
            "1h"
        }
    }
}

/// Percent change from `previous` to `current`.
///
/// A zero previous close is an arithmetic failure rather than an infinite change.
fn percent_change(current: f64, previous: f64) -> Result<f64, MarketDataError> {
    if previous == 0.0 {
        return Err(MarketDataError::ZeroPreviousClose {
            provider: PROVIDER_ID.to_string(),
        });
    }
    Ok((current - previous) / previous * 100.0)
}

fn seconds_to_utc(seconds: i64) -> Result<DateTime<Utc>, MarketDataError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| MarketDataError::MalformedResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("Invalid timestamp: {}", seconds),
        })
}

#[async_trait]
impl PriceProvider for YahooChartProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    fn instrument(&self) -> Instrument {
        Instrument::Sp500
    }

    async fn fetch_current(&self) -> Result<PriceQuote, MarketDataError> {
        let result = self.fetch_chart("1d", "2d").await?;
        let quote = Self::quote_from_result(&result)?;
        debug!(
            "Fetched {} ({}) price {} from {}",
            quote.symbol,
            result.meta.symbol.as_deref().unwrap_or(INDEX_TICKER),
            quote.price,
            PROVIDER_ID
        );
        Ok(quote)
    }

    async fn fetch_historical(&self, days: u32) -> Result<HistoricalSeries, MarketDataError> {
        let range = format!("{}d", days);
        let result = self
            .fetch_chart(Self::chart_interval(days), &range)
            .await?;
        let series = Self::series_from_result(result)?;
        debug!("Fetched {} SPX history points over {} days", series.len(), days);
        Ok(series)
    }
}

//! Yahoo Finance chart API response models.
//!
//! These models cover the `v8/finance/chart/{ticker}` endpoint, which returns
//! both the session metadata (current price, previous close) and the candle
//! arrays used for history.

use serde::Deserialize;

/// Main response wrapper for the chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResponse {
    pub chart: YahooChart,
}

/// Chart container; `result` is null when `error` is set
#[derive(Debug, Deserialize)]
pub struct YahooChart {
    pub result: Option<Vec<YahooChartResult>>,
    pub error: Option<YahooChartError>,
}

/// Error object reported inside a chart response
#[derive(Debug, Deserialize)]
pub struct YahooChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual result from the chart API
#[derive(Debug, Deserialize)]
pub struct YahooChartResult {
    pub meta: YahooChartMeta,
    /// Candle timestamps in epoch seconds
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Option<YahooIndicators>,
}

/// Session metadata
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YahooChartMeta {
    pub symbol: Option<String>,
    pub regular_market_price: Option<f64>,
    pub chart_previous_close: Option<f64>,
    // Note: currency, exchangeName, regularMarketTime etc. exist but are not used
}

/// Indicator arrays, aligned with `timestamp`
#[derive(Debug, Deserialize)]
pub struct YahooIndicators {
    #[serde(default)]
    pub quote: Vec<YahooIndicatorQuote>,
}

/// OHLCV arrays; entries are null for candles without trades
#[derive(Debug, Deserialize)]
pub struct YahooIndicatorQuote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_chart_meta() {
        let json = r#"{
            "chart": {
                "result": [{
                    "meta": {
                        "currency": "USD",
                        "symbol": "^GSPC",
                        "regularMarketPrice": 4500.0,
                        "chartPreviousClose": 4000.0
                    },
                    "timestamp": [1700000000],
                    "indicators": {"quote": [{"close": [4500.0]}]}
                }],
                "error": null
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        let result = &response.chart.result.unwrap()[0];
        assert_eq!(result.meta.regular_market_price, Some(4500.0));
        assert_eq!(result.meta.chart_previous_close, Some(4000.0));
        assert_eq!(result.meta.symbol.as_deref(), Some("^GSPC"));
    }

    #[test]
    fn test_deserialize_null_closes() {
        let json = r#"{"quote": [{"close": [10.0, null, 30.0]}]}"#;
        let indicators: YahooIndicators = serde_json::from_str(json).unwrap();
        assert_eq!(indicators.quote[0].close, vec![Some(10.0), None, Some(30.0)]);
    }

    #[test]
    fn test_deserialize_chart_error() {
        let json = r#"{
            "chart": {
                "result": null,
                "error": {"code": "Not Found", "description": "No data found, symbol may be delisted"}
            }
        }"#;
        let response: YahooChartResponse = serde_json::from_str(json).unwrap();
        assert!(response.chart.result.is_none());
        let error = response.chart.error.unwrap();
        assert_eq!(error.code.as_deref(), Some("Not Found"));
    }
}

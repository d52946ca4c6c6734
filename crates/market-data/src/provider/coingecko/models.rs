//! CoinGecko API response models.

use std::collections::HashMap;

use serde::Deserialize;

/// `/simple/price` response, keyed by coin id (e.g. "bitcoin").
pub type SimplePriceResponse = HashMap<String, SimplePrice>;

/// Price fields for one coin in the `/simple/price` response.
#[derive(Debug, Deserialize)]
pub struct SimplePrice {
    pub usd: Option<f64>,
    pub usd_24h_change: Option<f64>,
    pub usd_market_cap: Option<f64>,
}

/// `/coins/{id}/market_chart` response.
#[derive(Debug, Deserialize)]
pub struct MarketChartResponse {
    /// `[epoch_millis, price]` pairs, oldest first
    pub prices: Vec<(f64, f64)>,
    // Note: market_caps and total_volumes exist but are not used
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_simple_price() {
        let json = r#"{"bitcoin":{"usd":50000,"usd_24h_change":2.5,"usd_market_cap":900000000000}}"#;
        let response: SimplePriceResponse = serde_json::from_str(json).unwrap();
        let btc = &response["bitcoin"];
        assert_eq!(btc.usd, Some(50000.0));
        assert_eq!(btc.usd_24h_change, Some(2.5));
        assert_eq!(btc.usd_market_cap, Some(900000000000.0));
    }

    #[test]
    fn test_deserialize_simple_price_without_market_cap() {
        let json = r#"{"bitcoin":{"usd":50000,"usd_24h_change":-1.25}}"#;
        let response: SimplePriceResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response["bitcoin"].usd_market_cap, None);
    }

    #[test]
    fn test_deserialize_market_chart() {
        let json = r#"{
            "prices": [[1700000000000, 37000.5], [1700086400000, 37500.0]],
            "market_caps": [],
            "total_volumes": []
        }"#;
        let response: MarketChartResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.prices.len(), 2);
        assert_eq!(response.prices[0], (1700000000000.0, 37000.5));
    }
}

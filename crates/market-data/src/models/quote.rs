use serde::{Deserialize, Serialize};

use super::instrument::Instrument;

/// Normalized current price for an instrument.
///
/// A quote is either fresh from a provider (`error` absent) or degraded after
/// an upstream failure (`error` set, `price` and `change_24h` zero).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    /// Display symbol (e.g. "BTC", "SPX")
    pub symbol: String,

    /// Display name (e.g. "Bitcoin")
    pub name: String,

    /// Current price in USD
    pub price: f64,

    /// Percent change over the last 24 hours (or since the previous close)
    pub change_24h: f64,

    /// Market capitalization, crypto only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,

    /// Previous session close, index only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prev_close: Option<f64>,

    /// Short failure message when the upstream fetch failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl PriceQuote {
    /// Create a successful quote with the instrument's symbol and name.
    pub fn new(instrument: Instrument, price: f64, change_24h: f64) -> Self {
        Self {
            symbol: instrument.symbol().to_string(),
            name: instrument.display_name().to_string(),
            price,
            change_24h,
            market_cap: None,
            prev_close: None,
            error: None,
        }
    }

    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    pub fn with_prev_close(mut self, prev_close: f64) -> Self {
        self.prev_close = Some(prev_close);
        self
    }

    /// Create a degraded quote carrying an error message.
    pub fn failed(instrument: Instrument, message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::new(instrument, 0.0, 0.0)
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::MarketDataError;

/// The instruments tracked by the service.
///
/// The set is closed: each variant knows its cache key, display symbol,
/// display name, and the request tokens that select it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Instrument {
    /// Bitcoin, priced in USD.
    Bitcoin,
    /// The S&P 500 equity index.
    Sp500,
}

impl Instrument {
    pub const ALL: [Instrument; 2] = [Instrument::Bitcoin, Instrument::Sp500];

    /// Key under which the current quote is cached and reported in snapshots.
    pub fn cache_key(self) -> &'static str {
        match self {
            Self::Bitcoin => "btc",
            Self::Sp500 => "sp500",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Bitcoin => "BTC",
            Self::Sp500 => "SPX",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Self::Bitcoin => "Bitcoin",
            Self::Sp500 => "S&P 500",
        }
    }

    /// Lowercase tokens accepted in request paths.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            Self::Bitcoin => &["btc"],
            Self::Sp500 => &["sp500", "spx"],
        }
    }

    /// Resolve a request token, case-insensitively.
    ///
    /// Unknown tokens are a validation failure. Surrounding whitespace is not
    /// stripped, so `" btc"` is unknown.
    pub fn from_token(token: &str) -> Result<Self, MarketDataError> {
        Self::ALL
            .into_iter()
            .find(|instrument| {
                instrument
                    .aliases()
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(token))
            })
            .ok_or_else(|| MarketDataError::InvalidSymbol(token.to_string()))
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_token_is_case_insensitive() {
        assert_eq!(Instrument::from_token("btc").unwrap(), Instrument::Bitcoin);
        assert_eq!(Instrument::from_token("BTC").unwrap(), Instrument::Bitcoin);
        assert_eq!(Instrument::from_token("Sp500").unwrap(), Instrument::Sp500);
        assert_eq!(Instrument::from_token("SPX").unwrap(), Instrument::Sp500);
    }

    #[test]
    fn test_from_token_rejects_unknown() {
        let err = Instrument::from_token("XYZ").unwrap_err();
        assert!(matches!(err, MarketDataError::InvalidSymbol(ref s) if s == "XYZ"));

        assert!(Instrument::from_token("").is_err());
        assert!(Instrument::from_token("bitcoin").is_err());
    }

    #[test]
    fn test_from_token_rejects_padded_tokens() {
        for token in [" btc", "btc ", "\tspx", "sp500\n"] {
            let err = Instrument::from_token(token).unwrap_err();
            assert!(matches!(err, MarketDataError::InvalidSymbol(ref s) if s == token));
        }
    }

    #[test]
    fn test_identity() {
        assert_eq!(Instrument::Bitcoin.cache_key(), "btc");
        assert_eq!(Instrument::Bitcoin.symbol(), "BTC");
        assert_eq!(Instrument::Bitcoin.display_name(), "Bitcoin");
        assert_eq!(Instrument::Sp500.cache_key(), "sp500");
        assert_eq!(Instrument::Sp500.symbol(), "SPX");
        assert_eq!(Instrument::Sp500.display_name(), "S&P 500");
        assert_eq!(Instrument::Sp500.to_string(), "SPX");
    }
}

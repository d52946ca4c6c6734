use chrono::{DateTime, Utc};
use pricewatch_market_data::PriceQuote;
use serde::{Deserialize, Serialize};

/// Default history window when `days` is absent or not an integer.
pub const DEFAULT_HISTORY_DAYS: u32 = 7;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PriceResponse {
    pub timestamp: DateTime<Utc>,
    pub data: PriceQuote,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Raw query of the history endpoint.
///
/// `days` is kept as a string so malformed values fall back to the default
/// instead of rejecting the request.
#[derive(Deserialize, Debug, Default)]
pub struct HistoryQuery {
    pub days: Option<String>,
}

impl HistoryQuery {
    pub fn days(&self) -> u32 {
        self.days
            .as_deref()
            .and_then(|d| d.trim().parse::<i64>().ok())
            .map(|d| d.clamp(1, i64::from(u32::MAX)) as u32)
            .unwrap_or(DEFAULT_HISTORY_DAYS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(days: Option<&str>) -> HistoryQuery {
        HistoryQuery {
            days: days.map(str::to_string),
        }
    }

    #[test]
    fn test_days_default() {
        assert_eq!(query(None).days(), 7);
        assert_eq!(query(Some("abc")).days(), 7);
        assert_eq!(query(Some("2.5")).days(), 7);
    }

    #[test]
    fn test_days_parsed_and_clamped() {
        assert_eq!(query(Some("30")).days(), 30);
        assert_eq!(query(Some("1")).days(), 1);
        assert_eq!(query(Some("0")).days(), 1);
        assert_eq!(query(Some("-4")).days(), 1);
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Historical price series.
///
/// `timestamps[i]` is the instant of `prices[i]`; both vectors always have the
/// same length. Timestamps serialize as RFC 3339 (ISO-8601) strings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoricalSeries {
    timestamps: Vec<DateTime<Utc>>,
    prices: Vec<f64>,
}

impl HistoricalSeries {
    /// The series returned when the upstream fetch failed.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a series from `(instant, price)` points, keeping their order.
    pub fn from_points(points: impl IntoIterator<Item = (DateTime<Utc>, f64)>) -> Self {
        let (timestamps, prices) = points.into_iter().unzip();
        Self { timestamps, prices }
    }

    pub fn timestamps(&self) -> &[DateTime<Utc>] {
        &self.timestamps
    }

    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_from_points_keeps_alignment() {
        let t1 = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let t2 = Utc.timestamp_opt(1_700_086_400, 0).unwrap();
        let series = HistoricalSeries::from_points(vec![(t1, 10.0), (t2, 30.0)]);

        assert_eq!(series.len(), 2);
        assert_eq!(series.timestamps(), &[t1, t2]);
        assert_eq!(series.prices(), &[10.0, 30.0]);
    }

    #[test]
    fn test_serializes_iso_timestamps() {
        let t1 = Utc.timestamp_opt(0, 0).unwrap();
        let series = HistoricalSeries::from_points(vec![(t1, 1.5)]);
        let value = serde_json::to_value(&series).unwrap();

        assert_eq!(value["timestamps"][0], "1970-01-01T00:00:00Z");
        assert_eq!(value["prices"][0], 1.5);
    }

    #[test]
    fn test_empty_serializes_as_empty_arrays() {
        let value = serde_json::to_value(HistoricalSeries::empty()).unwrap();
        assert_eq!(value, serde_json::json!({"timestamps": [], "prices": []}));
    }
}

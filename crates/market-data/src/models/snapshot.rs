use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::quote::PriceQuote;

/// Current quotes for every tracked instrument, captured together.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PriceSnapshot {
    pub timestamp: DateTime<Utc>,
    pub data: SnapshotData,
}

/// Snapshot payload keyed by instrument cache key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SnapshotData {
    pub btc: PriceQuote,
    pub sp500: PriceQuote,
}

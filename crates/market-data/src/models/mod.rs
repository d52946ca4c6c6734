//! Market data models
//!
//! This module contains the core data types for market data operations:
//! - `instrument` - The closed set of tracked instruments and their request tokens
//! - `quote` - Normalized current price (PriceQuote)
//! - `series` - Historical price series (HistoricalSeries)
//! - `snapshot` - Combined current prices (PriceSnapshot)

mod instrument;
mod quote;
mod series;
mod snapshot;

pub use instrument::Instrument;
pub use quote::PriceQuote;
pub use series::HistoricalSeries;
pub use snapshot::{PriceSnapshot, SnapshotData};

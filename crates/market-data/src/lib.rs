//! Pricewatch Market Data Crate
//!
//! Fetches current and historical prices for the two instruments tracked by
//! the Pricewatch dashboard (Bitcoin and the S&P 500 index) and memoizes
//! current quotes for a short time to bound upstream traffic.
//!
//! # Architecture
//!
//! ```text
//! +------------------+
//! |   QuoteService   |  (orchestration + degradation policy)
//! +------------------+
//!          |
//!          +-------------------------+
//!          v                         v
//! +------------------+     +-------------------+
//! |  ExpiringCache   |     |   PriceProvider   |  (CoinGecko, Yahoo chart)
//! +------------------+     +-------------------+
//!                                    |
//!                                    v
//!                          +-------------------+
//!                          | PriceQuote/Series |  (normalized data)
//!                          +-------------------+
//! ```
//!
//! # Core Types
//!
//! - [`Instrument`] - The closed set of supported instruments
//! - [`PriceQuote`] - Normalized current price, possibly degraded
//! - [`HistoricalSeries`] - Index-aligned timestamps and prices
//! - [`PriceSnapshot`] - Both current quotes with a capture timestamp
//! - [`ExpiringCache`] - TTL cache with lazy expiry and a capacity bound
//! - [`QuoteService`] - The operations consumed by the transport layer

pub mod cache;
pub mod errors;
pub mod models;
pub mod provider;
pub mod service;

pub use cache::{Clock, ExpiringCache, SystemClock};
pub use errors::{FailureClass, MarketDataError};
pub use models::{HistoricalSeries, Instrument, PriceQuote, PriceSnapshot, SnapshotData};
pub use provider::coingecko::CoinGeckoProvider;
pub use provider::yahoo::YahooChartProvider;
pub use provider::PriceProvider;
pub use service::{QuoteService, QuoteServiceTrait};

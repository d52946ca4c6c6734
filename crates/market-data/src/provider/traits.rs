//! Price provider trait definitions.
//!
//! This module defines the `PriceProvider` trait that every upstream
//! adapter implements.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Instrument, PriceQuote};

/// Trait for upstream price providers.
///
/// Each provider serves exactly one [`Instrument`] and knows the wire shapes of
/// its upstream API. Implementations must turn every transport, status, and
/// decoding failure into a [`MarketDataError`]; the quote service decides how
/// failures are presented to callers.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use pricewatch_market_data::provider::PriceProvider;
///
/// struct FixedProvider;
///
/// #[async_trait]
/// impl PriceProvider for FixedProvider {
///     fn id(&self) -> &'static str {
///         "FIXED"
///     }
///
///     fn instrument(&self) -> Instrument {
///         Instrument::Bitcoin
///     }
///
///     // ... implement fetch methods
/// }
/// ```
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "COINGECKO" or "YAHOO".
    /// Used in error messages and logs.
    fn id(&self) -> &'static str;

    /// The instrument this provider prices.
    fn instrument(&self) -> Instrument;

    /// Fetch the current price.
    ///
    /// # Returns
    ///
    /// A successful quote (no `error`) or a `MarketDataError` on failure.
    async fn fetch_current(&self) -> Result<PriceQuote, MarketDataError>;

    /// Fetch the price history covering the last `days` days.
    ///
    /// # Returns
    ///
    /// A series ordered by timestamp ascending, or a `MarketDataError` on failure.
    async fn fetch_historical(&self, days: u32) -> Result<HistoricalSeries, MarketDataError>;
}

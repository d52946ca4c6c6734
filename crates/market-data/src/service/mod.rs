//! Quote service: cache-backed current prices, history, and snapshots.
//!
//! The service is the only place where provider failures are turned into
//! in-band markers. Current-price failures become degraded quotes (never
//! cached); history failures become empty series. Unknown symbol tokens are
//! rejected before any provider is contacted.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, error};

use crate::cache::{ExpiringCache, DEFAULT_TTL};
use crate::errors::MarketDataError;
use crate::models::{HistoricalSeries, Instrument, PriceQuote, PriceSnapshot, SnapshotData};
use crate::provider::PriceProvider;

/// Operations exposed to the transport layer.
#[async_trait]
pub trait QuoteServiceTrait: Send + Sync {
    /// Current Bitcoin quote, possibly degraded.
    async fn current_crypto(&self) -> PriceQuote;

    /// Current S&P 500 quote, possibly degraded.
    async fn current_index(&self) -> PriceQuote;

    /// Current quote for the instrument named by `token`.
    ///
    /// Fails only with [`MarketDataError::InvalidSymbol`].
    async fn current_for_token(&self, token: &str) -> Result<PriceQuote, MarketDataError>;

    /// Both current quotes, fetched concurrently.
    async fn snapshot(&self) -> PriceSnapshot;

    /// Price history for the instrument named by `token`; never cached.
    ///
    /// Fails only with [`MarketDataError::InvalidSymbol`].
    async fn historical(&self, token: &str, days: u32)
        -> Result<HistoricalSeries, MarketDataError>;
}

/// Cache key type; one entry per instrument.
pub type QuoteCache = ExpiringCache<&'static str, PriceQuote>;

pub struct QuoteService {
    crypto: Arc<dyn PriceProvider>,
    index: Arc<dyn PriceProvider>,
    cache: Arc<QuoteCache>,
    ttl: Duration,
}

impl QuoteService {
    /// Create a service with the default 30 second TTL.
    pub fn new(
        crypto: Arc<dyn PriceProvider>,
        index: Arc<dyn PriceProvider>,
        cache: Arc<QuoteCache>,
    ) -> Self {
        Self::with_ttl(crypto, index, cache, DEFAULT_TTL)
    }

    pub fn with_ttl(
        crypto: Arc<dyn PriceProvider>,
        index: Arc<dyn PriceProvider>,
        cache: Arc<QuoteCache>,
        ttl: Duration,
    ) -> Self {
        Self {
            crypto,
            index,
            cache,
            ttl,
        }
    }

    fn provider_for(&self, instrument: Instrument) -> &Arc<dyn PriceProvider> {
        match instrument {
            Instrument::Bitcoin => &self.crypto,
            Instrument::Sp500 => &self.index,
        }
    }

    /// Current quote for `instrument`: cached when fresh, fetched otherwise.
    pub async fn current(&self, instrument: Instrument) -> PriceQuote {
        let key = instrument.cache_key();
        if let Some(quote) = self.cache.get(&key) {
            debug!("Cache hit for {}", key);
            return quote;
        }

        let provider = self.provider_for(instrument);
        match provider.fetch_current().await {
            Ok(quote) => {
                self.cache.put(key, quote.clone(), self.ttl);
                quote
            }
            Err(e) => {
                error!(
                    "Error fetching {} price from {}: {}",
                    instrument,
                    provider.id(),
                    e
                );
                PriceQuote::failed(instrument, e.to_string())
            }
        }
    }

    /// Price history for `instrument`; failures yield an empty series.
    pub async fn history(&self, instrument: Instrument, days: u32) -> HistoricalSeries {
        let provider = self.provider_for(instrument);
        match provider.fetch_historical(days).await {
            Ok(series) => series,
            Err(e) => {
                error!(
                    "Error fetching historical data for {} from {}: {}",
                    instrument,
                    provider.id(),
                    e
                );
                HistoricalSeries::empty()
            }
        }
    }
}

#[async_trait]
impl QuoteServiceTrait for QuoteService {
    async fn current_crypto(&self) -> PriceQuote {
        self.current(Instrument::Bitcoin).await
    }

    async fn current_index(&self) -> PriceQuote {
        self.current(Instrument::Sp500).await
    }

    async fn current_for_token(&self, token: &str) -> Result<PriceQuote, MarketDataError> {
        let instrument = Instrument::from_token(token)?;
        Ok(self.current(instrument).await)
    }

    async fn snapshot(&self) -> PriceSnapshot {
        let (btc, sp500) = tokio::join!(self.current_crypto(), self.current_index());
        PriceSnapshot {
            timestamp: Utc::now(),
            data: SnapshotData { btc, sp500 },
        }
    }

    async fn historical(
        &self,
        token: &str,
        days: u32,
    ) -> Result<HistoricalSeries, MarketDataError> {
        let instrument = Instrument::from_token(token)?;
        Ok(self.history(instrument, days).await)
    }
}

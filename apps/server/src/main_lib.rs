use std::sync::Arc;

use pricewatch_market_data::{
    service::QuoteCache, CoinGeckoProvider, PriceProvider, QuoteService, QuoteServiceTrait,
    YahooChartProvider,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quote_service: Arc<dyn QuoteServiceTrait>,
}

pub fn init_tracing(log_format: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

/// Wire providers, cache, and quote service. The cache lives as long as the state.
pub fn build_state(config: &Config) -> Arc<AppState> {
    let crypto: Arc<dyn PriceProvider> = Arc::new(CoinGeckoProvider::with_base_url(
        config.coingecko_base_url.clone(),
        config.upstream_timeout,
    ));
    let index: Arc<dyn PriceProvider> = Arc::new(YahooChartProvider::with_base_url(
        config.yahoo_base_url.clone(),
        config.upstream_timeout,
    ));
    let cache = Arc::new(QuoteCache::with_capacity(config.cache_capacity));

    tracing::info!(
        "Quote cache: ttl {:?}, capacity {}; upstream timeout {:?}",
        config.cache_ttl,
        cache.capacity(),
        config.upstream_timeout
    );

    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::with_ttl(
        crypto,
        index,
        cache,
        config.cache_ttl,
    ));

    Arc::new(AppState { quote_service })
}

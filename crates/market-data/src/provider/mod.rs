//! Price provider abstractions and implementations.
//!
//! This module contains:
//! - The `PriceProvider` trait that all upstream adapters implement
//! - Shared HTTP helpers (timeouts, status checks, JSON decoding)
//! - Concrete providers: CoinGecko (Bitcoin) and the Yahoo chart API (S&P 500)
//!
//! Providers only normalize. Caching and failure degradation live in the
//! quote service.

pub mod http;
mod traits;

pub mod coingecko;
pub mod yahoo;

pub use traits::PriceProvider;

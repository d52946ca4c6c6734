//! Error types and failure classification for the market data crate.
//!
//! This module provides:
//! - [`MarketDataError`]: The main error enum for all market data operations
//! - [`FailureClass`]: Classification for determining how a failure surfaces

mod class;

pub use class::FailureClass;

use thiserror::Error;

/// Errors that can occur during market data operations.
///
/// Each variant is classified into a [`FailureClass`] via the
/// [`failure_class`](Self::failure_class) method.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The request named an instrument this service does not track.
    #[error("Invalid symbol: {0}")]
    InvalidSymbol(String),

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider answered with a non-success HTTP status.
    #[error("{provider} returned HTTP {status}")]
    HttpStatus {
        /// The provider that rejected the request
        provider: String,
        /// The HTTP status code
        status: u16,
    },

    /// The request never produced a response (DNS, connect, TLS, reset).
    #[error("Network error: {provider} - {message}")]
    Network {
        /// The provider being contacted
        provider: String,
        /// The transport error message
        message: String,
    },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response: {provider} - {message}")]
    MalformedResponse {
        /// The provider that sent the payload
        provider: String,
        /// The decoding error message
        message: String,
    },

    /// A field required for normalization was missing or null.
    #[error("Missing field: {provider} - {field}")]
    MissingField {
        /// The provider that sent the payload
        provider: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// The provider reported an error inside an otherwise successful response.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that reported the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The previous close was zero so no percent change can be computed.
    #[error("Zero previous close: {provider}")]
    ZeroPreviousClose {
        /// The provider that sent the payload
        provider: String,
    },
}

impl MarketDataError {
    /// Returns the failure classification for this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricewatch_market_data::errors::{FailureClass, MarketDataError};
    ///
    /// let error = MarketDataError::InvalidSymbol("XYZ".to_string());
    /// assert_eq!(error.failure_class(), FailureClass::Validation);
    ///
    /// let error = MarketDataError::Timeout { provider: "YAHOO".to_string() };
    /// assert_eq!(error.failure_class(), FailureClass::Upstream);
    /// ```
    pub fn failure_class(&self) -> FailureClass {
        match self {
            Self::InvalidSymbol(_) => FailureClass::Validation,

            Self::Timeout { .. }
            | Self::HttpStatus { .. }
            | Self::Network { .. }
            | Self::MalformedResponse { .. }
            | Self::MissingField { .. }
            | Self::ProviderError { .. } => FailureClass::Upstream,

            Self::ZeroPreviousClose { .. } => FailureClass::Arithmetic,
        }
    }

    /// Map a reqwest error raised while talking to `provider`.
    pub fn from_reqwest(provider: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                provider: provider.to_string(),
            }
        } else if let Some(status) = err.status() {
            Self::HttpStatus {
                provider: provider.to_string(),
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            Self::MalformedResponse {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        } else {
            Self::Network {
                provider: provider.to_string(),
                message: err.to_string(),
            }
        }
    }

    pub(crate) fn missing(provider: &str, field: &'static str) -> Self {
        Self::MissingField {
            provider: provider.to_string(),
            field,
        }
    }
}

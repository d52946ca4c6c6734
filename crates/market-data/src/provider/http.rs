//! HTTP plumbing shared by the upstream adapters.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::errors::MarketDataError;

/// Default upstream request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Browser-like user agent; Yahoo rejects requests from obvious bots.
pub const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build a client whose every request is bounded by `timeout`.
pub fn build_client(timeout: Duration) -> Client {
    Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Send `request` and decode a JSON body, mapping every failure for `provider`.
///
/// Non-2xx statuses are failures even when the body is valid JSON.
pub async fn get_json<T: DeserializeOwned>(
    request: RequestBuilder,
    provider: &str,
) -> Result<T, MarketDataError> {
    let response = request
        .send()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(MarketDataError::HttpStatus {
            provider: provider.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response
        .bytes()
        .await
        .map_err(|e| MarketDataError::from_reqwest(provider, e))?;

    serde_json::from_slice(&body).map_err(|e| MarketDataError::MalformedResponse {
        provider: provider.to_string(),
        message: e.to_string(),
    })
}

/// Join a configured base URL and a path without doubling slashes.
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use pricewatch_market_data::{FailureClass, MarketDataError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid symbol")]
    InvalidSymbol,
    #[error("{0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidSymbol => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorBody {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<MarketDataError> for ApiError {
    fn from(err: MarketDataError) -> Self {
        match err.failure_class() {
            FailureClass::Validation => {
                tracing::debug!("Rejected request: {}", err);
                ApiError::InvalidSymbol
            }
            // The quote service degrades these in-band; reaching here is a bug.
            FailureClass::Upstream | FailureClass::Arithmetic => {
                tracing::error!("Unexpected upstream error at the API boundary: {}", err);
                ApiError::Internal("Upstream unavailable".to_string())
            }
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_symbol_maps_to_bad_request() {
        let err: ApiError = MarketDataError::InvalidSymbol("XYZ".to_string()).into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"error": "Invalid symbol"})
        );
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_internal_error() {
        let err: ApiError = MarketDataError::HttpStatus {
            provider: "YAHOO".to_string(),
            status: 503,
        }
        .into();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Upstream unavailable");
    }
}

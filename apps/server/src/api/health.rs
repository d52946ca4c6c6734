use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;

/// Liveness probe; does not touch upstream providers.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: Utc::now(),
    })
}

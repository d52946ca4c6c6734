use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use pricewatch_market_data::{HistoricalSeries, PriceSnapshot};

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{HistoryQuery, PriceResponse},
};

/// Current quotes for both instruments. Always 200; failures are in-band.
async fn get_prices(State(state): State<Arc<AppState>>) -> Json<PriceSnapshot> {
    Json(state.quote_service.snapshot().await)
}

async fn get_price(
    Path(symbol): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<PriceResponse>> {
    let data = state.quote_service.current_for_token(&symbol).await?;
    Ok(Json(PriceResponse {
        timestamp: Utc::now(),
        data,
    }))
}

async fn get_historical(
    Path(symbol): Path<String>,
    Query(query): Query<HistoryQuery>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HistoricalSeries>> {
    let series = state
        .quote_service
        .historical(&symbol, query.days())
        .await?;
    Ok(Json(series))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/prices", get(get_prices))
        .route("/price/{symbol}", get(get_price))
        .route("/historical/{symbol}", get(get_historical))
}

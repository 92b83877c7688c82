//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use tracing::info;

use crate::{
    services::{LayoffRecord, TrendInsight},
    state::AppState,
};
use super::{
    error::ApiError,
    extract::Payload,
    responses::MessageResponse,
};

/// Handle GET /api/tech-layoffs - Return the known layoff figures
pub async fn get_tech_layoffs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LayoffRecord>>, ApiError> {
    let records = state.analytics.fetch_tech_layoffs().await?;
    info!("Tech-layoffs endpoint called - returning {} records", records.len());
    Ok(Json(records))
}

/// Handle POST /api/analyze - Analyze the `data` field of the request body
pub async fn analyze_trends(
    State(state): State<Arc<AppState>>,
    Payload(mut body): Payload,
) -> Result<Json<TrendInsight>, ApiError> {
    // Passed through as-is; absent becomes null
    let data = body.get_mut("data").map(Value::take).unwrap_or_default();
    let insight = state.analytics.analyze_trends(data).await?;
    info!("Analyze endpoint called - trend: {}", insight.trend);
    Ok(Json(insight))
}

/// Fallback for any request no route matched
pub async fn not_found() -> (StatusCode, Json<MessageResponse>) {
    (StatusCode::NOT_FOUND, Json(MessageResponse::route_not_found()))
}

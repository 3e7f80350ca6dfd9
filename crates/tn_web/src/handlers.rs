use axum::{extract::State, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tn_core::AggregatedResult;

use crate::error::ApiError;
use crate::extract::ApiJson;
use crate::AppState;

/// Absent and `null` fields both fall through to filter validation.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryRequest {
    pub category: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GenreRequest {
    pub genre: Option<String>,
    pub country: Option<String>,
}

pub async fn articles_by_category(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<CategoryRequest>,
) -> Result<Json<AggregatedResult>, ApiError> {
    let articles = state
        .aggregator
        .collect_by_category(
            request.category.as_deref().unwrap_or_default(),
            request.country.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(articles))
}

pub async fn articles_by_genre(
    State(state): State<Arc<AppState>>,
    ApiJson(request): ApiJson<GenreRequest>,
) -> Result<Json<AggregatedResult>, ApiError> {
    let articles = state
        .aggregator
        .collect_by_genre(
            request.genre.as_deref().unwrap_or_default(),
            request.country.as_deref().unwrap_or_default(),
        )
        .await?;
    Ok(Json(articles))
}

pub async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

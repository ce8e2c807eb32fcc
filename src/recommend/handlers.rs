use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::Value;

use super::error::RecommendError;
use super::types::{PlacesResponse, RecommendationRequest};
use crate::server::AppState;

/// `POST /api/recommend`
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> Result<Json<PlacesResponse<Value>>, RecommendError> {
    let Json(request) = payload
        .map_err(|e| RecommendError::Validation(format!("invalid request body: {}", e.body_text())))?;

    let response = state.recommender.recommend(&request).await?;

    Ok(Json(response))
}

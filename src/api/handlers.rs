use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use rand::{rngs::StdRng, SeedableRng};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::AppError,
    middleware::request_id::RequestId,
    models::{RecommendationResponse, RecommendedFood},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub id: String,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommend a meal for the user in `?id=`
///
/// Responds 200 with the recommendations, or 204 with no body when no slot
/// produced one.
pub async fn recommend_food(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<RecommendQuery>,
) -> Result<Response, AppError> {
    let user_id = query.id.as_str();
    if user_id.trim().is_empty() {
        return Err(AppError::InvalidInput("id must not be empty".to_string()));
    }

    tracing::info!(
        request_id = %request_id,
        user_id = %user_id,
        "Processing food recommendation request"
    );

    let mut rng = StdRng::from_entropy();
    let recommendations = state.recommender.recommend(user_id, &mut rng).await;

    if recommendations.is_empty() {
        tracing::warn!(request_id = %request_id, user_id = %user_id, "No meal recommended");
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let response = RecommendationResponse {
        recommended_foods: recommendations.iter().map(RecommendedFood::from).collect(),
    };

    tracing::info!(
        request_id = %request_id,
        count = response.recommended_foods.len(),
        "Food recommendation completed"
    );

    Ok((StatusCode::OK, Json(response)).into_response())
}

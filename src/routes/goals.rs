use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use nutrimeal_goal::{CreateGoalInput, HealthGoalRow, UpdateGoalInput};
use nutrimeal_shared::Error;
use serde_json::json;

use super::AppState;
use crate::error::{ApiJson, ApiResult};

/// POST /api/health-goals
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateGoalInput>,
) -> ApiResult<impl IntoResponse> {
    let goal = state.goal_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(goal)))
}

/// GET /api/health-goals/{user_id}
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<HealthGoalRow>> {
    match state.goal_query.latest(&user_id).await? {
        Some(goal) => Ok(Json(goal)),
        None => Err(Error::NotFound("Health goal not found".to_owned()).into()),
    }
}

/// GET /api/health-goals/user/{user_id}
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<HealthGoalRow>> {
    match state.goal_query.latest(&user_id).await? {
        Some(goal) => Ok(Json(goal)),
        None => Err(Error::NotFound("No health goals found for this user".to_owned()).into()),
    }
}

/// PUT /api/health-goals/{user_id}
#[tracing::instrument(skip(state, input))]
pub async fn update(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    ApiJson(input): ApiJson<UpdateGoalInput>,
) -> ApiResult<impl IntoResponse> {
    state.goal_command.update(&user_id, input).await?;

    Ok(Json(json!({"message": "Health goal updated successfully"})))
}

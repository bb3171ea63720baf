use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use nutrimeal_foodlog::{CreateFoodLogInput, FoodLogRow};

use super::AppState;
use crate::error::{ApiJson, ApiResult};

/// GET /api/food-logs/user/{user_id}
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<FoodLogRow>>> {
    Ok(Json(state.food_log_query.by_user(&user_id).await?))
}

/// POST /api/food-logs
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateFoodLogInput>,
) -> ApiResult<impl IntoResponse> {
    let log = state.food_log_command.create(input).await?;

    Ok((StatusCode::CREATED, Json(log)))
}

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use nutrimeal_mealplan::{GenerateInput, MealPlan};

use super::AppState;
use crate::error::{ApiJson, ApiResult};

/// GET /api/meal-plans/user/{user_id}
pub async fn by_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> ApiResult<Json<Vec<MealPlan>>> {
    Ok(Json(state.meal_plan_query.by_user(&user_id).await?))
}

/// POST /api/meal-plans
///
/// Returns:
/// - 201 Created with the generated plan
/// - 400 when the user already has a plan for that date, or fewer than three recipes exist
pub async fn generate(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<GenerateInput>,
) -> ApiResult<impl IntoResponse> {
    let plan = state.meal_plan_command.generate(input).await?;

    Ok((StatusCode::CREATED, Json(plan)))
}

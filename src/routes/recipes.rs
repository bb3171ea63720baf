use axum::{
    Json,
    extract::{Path, State},
};
use nutrimeal_recipe::{Recipe, RecipePage};
use nutrimeal_shared::Error;
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiQuery, ApiResult};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct CategoryQuery {
    pub category: Option<String>,
}

/// GET /api/recipes?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<RecipePage>> {
    Ok(Json(state.recipe_query.list(query.page, query.limit).await?))
}

/// GET /api/recipes/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Recipe>> {
    match state.recipe_query.find(&id).await? {
        Some(recipe) => Ok(Json(recipe)),
        None => Err(Error::NotFound("Recipe not found".to_owned()).into()),
    }
}

/// GET /api/recipes/category?category=
pub async fn by_category(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<CategoryQuery>,
) -> ApiResult<Json<Vec<Recipe>>> {
    let Some(category) = query.category.filter(|category| !category.is_empty()) else {
        return Err(Error::User("Category is required".to_owned()).into());
    };

    Ok(Json(state.recipe_query.by_category(&category).await?))
}

use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use nutrimeal_community::{CreatePostInput, ImageInput, Post};
use serde::Deserialize;
use serde_json::json;

use super::{AppState, recipes::PageQuery};
use crate::error::{ApiJson, ApiQuery, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LikeInput {
    #[serde(rename = "userId", default)]
    pub user_id: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteQuery {
    #[serde(rename = "userId")]
    pub user_id: Option<String>,
}

/// GET /api/community/posts?page=&limit=
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(
        state.community_query.list(query.page, query.limit).await?,
    ))
}

/// POST /api/community/posts
///
/// Multipart form: `content`, `author.id`, `author.name`, `author.picture`, optional `image`.
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let mut input = CreatePostInput::default();

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "content" => input.content = field.text().await?,
            "author.id" => input.author_id = Some(field.text().await?),
            "author.name" => input.author_name = Some(field.text().await?),
            "author.picture" => input.author_picture = Some(field.text().await?),
            "image" => {
                let content_type = field.content_type().map(str::to_owned);
                let data = field.bytes().await?.to_vec();
                input.image = Some(ImageInput { data, content_type });
            }
            _ => {}
        }
    }

    let post = state.community_command.create(input).await?;

    tracing::info!(post_id = %post.id, "post created");

    Ok((StatusCode::CREATED, Json(post)))
}

/// POST /api/community/posts/{post_id}/like
#[tracing::instrument(skip(state, input))]
pub async fn like(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    ApiJson(input): ApiJson<LikeInput>,
) -> ApiResult<impl IntoResponse> {
    let toggled = state
        .community_command
        .toggle_like(&post_id, &input.user_id)
        .await?;

    Ok(Json(json!({
        "success": true,
        "liked": toggled.liked,
        "likes": toggled.likes,
    })))
}

/// DELETE /api/community/posts/{post_id}?userId=
#[tracing::instrument(skip(state, query))]
pub async fn delete(
    State(state): State<AppState>,
    Path(post_id): Path<String>,
    ApiQuery(query): ApiQuery<DeleteQuery>,
) -> ApiResult<impl IntoResponse> {
    let user_id = query.user_id.unwrap_or_default();
    state.community_command.delete(&post_id, &user_id).await?;

    Ok(Json(json!({
        "success": true,
        "message": "Post deleted successfully",
    })))
}

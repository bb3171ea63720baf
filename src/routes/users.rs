use axum::{
    Json,
    extract::{FromRequest, Multipart, Path, Request, State},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use nutrimeal_shared::Error;
use nutrimeal_user::{CreateUserInput, Created, UpdateUserInput, UserRow, UserSummary};
use serde::Deserialize;

use super::AppState;
use crate::error::{ApiJson, ApiQuery, ApiResult};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

struct Picture {
    filename: String,
    bytes: Vec<u8>,
}

/// POST /api/users
///
/// 201 with the new user, or 200 with the user already registered under that email.
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateUserInput>,
) -> ApiResult<impl IntoResponse> {
    let response = match state.user_command.create_or_get(input).await? {
        Created::New(user) => (StatusCode::CREATED, Json(UserSummary::from(user))),
        Created::Existing(user) => (StatusCode::OK, Json(UserSummary::from(user))),
    };

    Ok(response)
}

/// GET /api/users/email?email=
pub async fn by_email(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<EmailQuery>,
) -> ApiResult<Json<UserSummary>> {
    let Some(email) = query.email.filter(|email| !email.is_empty()) else {
        return Err(Error::User("Email is required".to_owned()).into());
    };

    match state.user_query.find_by_email(email).await? {
        Some(user) => Ok(Json(user.into())),
        None => Err(Error::NotFound("User not found".to_owned()).into()),
    }
}

/// GET /api/users/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserRow>> {
    let id = nutrimeal_shared::parse_id(&id, "ID")?;

    match state.user_query.find(id).await? {
        Some(user) => Ok(Json(user)),
        None => Err(Error::NotFound("User not found".to_owned()).into()),
    }
}

/// PUT /api/users/{id}
///
/// Accepts a JSON body, or a multipart form whose optional `picture` file
/// replaces the profile picture before the remaining fields are applied.
#[tracing::instrument(skip(state, request))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    request: Request,
) -> ApiResult<Json<UserRow>> {
    let id = nutrimeal_shared::parse_id(&id, "ID")?;

    let (input, picture) = if is_multipart(request.headers()) {
        let multipart = Multipart::from_request(request, &state).await?;
        read_update_form(multipart).await?
    } else {
        let ApiJson(input) = ApiJson::<UpdateUserInput>::from_request(request, &state).await?;
        (input, None)
    };

    if let Some(picture) = picture {
        replace_picture(&state, &id, picture).await?;
    }

    Ok(Json(state.user_command.update(id, input).await?))
}

/// PUT /api/users/{id}/picture
#[tracing::instrument(skip(state, multipart))]
pub async fn update_picture(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut multipart: Multipart,
) -> ApiResult<Json<UserRow>> {
    let id = nutrimeal_shared::parse_id(&id, "user ID")?;

    let mut picture = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() == Some("picture") {
            picture = Some(Picture {
                filename: field.file_name().unwrap_or("picture").to_owned(),
                bytes: field.bytes().await?.to_vec(),
            });
            break;
        }
    }

    let Some(picture) = picture else {
        return Err(Error::User("No file uploaded".to_owned()).into());
    };

    Ok(Json(replace_picture(&state, &id, picture).await?))
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

async fn read_update_form(
    mut multipart: Multipart,
) -> ApiResult<(UpdateUserInput, Option<Picture>)> {
    let mut input = UpdateUserInput::default();
    let mut picture = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };

        match name.as_str() {
            "picture" => {
                let filename = field.file_name().unwrap_or("picture").to_owned();
                let bytes = field.bytes().await?.to_vec();
                if !bytes.is_empty() {
                    picture = Some(Picture { filename, bytes });
                }
            }
            "email" => input.email = Some(field.text().await?),
            "name" => input.name = Some(field.text().await?),
            "birthday" => input.birthday = Some(field.text().await?),
            "height" => {
                let value = field.text().await?;
                let height = value
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| Error::User("Invalid height".to_owned()))?;
                input.height = Some(height);
            }
            _ => {}
        }
    }

    Ok((input, picture))
}

/// Uploads the new picture, dropping the previously hosted one first.
///
/// Failing to delete the old image is logged and ignored.
async fn replace_picture(state: &AppState, id: &str, picture: Picture) -> ApiResult<UserRow> {
    let Some(user) = state.user_query.find(id).await? else {
        return Err(Error::NotFound("User not found".to_owned()).into());
    };

    if let Some(delete_hash) = user.delete_hash.filter(|hash| !hash.is_empty()) {
        if let Err(err) = state.image_host.delete(&delete_hash).await {
            tracing::warn!(user_id = %id, "Failed to delete old image: {err}");
        }
    }

    let uploaded = state
        .image_host
        .upload(&picture.filename, picture.bytes)
        .await?;

    Ok(state
        .user_command
        .set_picture(id, uploaded.link, uploaded.delete_hash)
        .await?)
}

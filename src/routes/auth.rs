use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use axum_extra::extract::CookieJar;
use nutrimeal_shared::Error;
use nutrimeal_user::{CreateUserInput, UserSummary};
use serde::Deserialize;
use serde_json::json;

use super::AppState;
use crate::{
    auth::{removal_cookie, session_cookie, session_token},
    error::{ApiJson, ApiResult},
};

#[derive(Debug, Deserialize)]
pub struct SignInInput {
    #[serde(default)]
    pub email: String,
}

/// POST /api/auth/signin
#[tracing::instrument(skip_all)]
pub async fn sign_in(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(input): ApiJson<SignInInput>,
) -> ApiResult<(CookieJar, Json<UserSummary>)> {
    let Some(user) = state.user_query.find_by_email(input.email).await? else {
        return Err(Error::NotFound("User not found".to_owned()).into());
    };

    let jar = open_session(&state, jar, &user.id).await?;

    tracing::info!(user_id = %user.id, "signed in");

    Ok((jar, Json(user.into())))
}

/// POST /api/auth/signup
#[tracing::instrument(skip_all)]
pub async fn sign_up(
    State(state): State<AppState>,
    jar: CookieJar,
    ApiJson(input): ApiJson<CreateUserInput>,
) -> ApiResult<impl IntoResponse> {
    let user = state.user_command.sign_up(input).await?;
    let jar = open_session(&state, jar, &user.id).await?;

    tracing::info!(user_id = %user.id, "signed up");

    Ok((StatusCode::CREATED, jar, Json(UserSummary::from(user))))
}

/// POST /api/auth/signout
#[tracing::instrument(skip_all)]
pub async fn sign_out(
    State(state): State<AppState>,
    jar: CookieJar,
) -> ApiResult<impl IntoResponse> {
    let session = &state.config.session;
    let live = match session_token(session, &jar) {
        Some(token) => state.user_query.find_session(token).await?,
        None => None,
    };

    match live {
        Some(live) => {
            state.user_command.destroy_session(live.id).await?;
            tracing::info!(user_id = %live.user_id, "signed out");
        }
        None => tracing::debug!("sign out without a live session"),
    }

    Ok((
        jar.remove(removal_cookie(session)),
        Json(json!({"message": "Signed out successfully"})),
    ))
}

async fn open_session(state: &AppState, jar: CookieJar, user_id: &str) -> ApiResult<CookieJar> {
    let config = &state.config.session;
    let previous = session_token(config, &jar);

    let session = state
        .user_command
        .create_session(user_id, config.ttl_secs(), previous.as_deref())
        .await?;

    Ok(jar.add(session_cookie(config, session.id)))
}

use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts,
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use nutrimeal_shared::Error;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] Error),

    /// Body or query string could not be decoded.
    #[error("Invalid request body")]
    InvalidBody(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        ApiError::InvalidBody(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        ApiError::InvalidBody(err.body_text())
    }
}

impl ApiError {
    fn status_and_message(self) -> (StatusCode, String) {
        match self {
            ApiError::InvalidBody(detail) => {
                tracing::debug!(detail, "rejected request body");
                (StatusCode::BAD_REQUEST, "Invalid request body".to_string())
            }
            ApiError::Domain(err) => match err {
                Error::Validate(_) | Error::User(_) | Error::InsufficientRecipes { .. } => {
                    (StatusCode::BAD_REQUEST, err.to_string())
                }
                Error::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
                Error::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
                Error::Conflict(msg) => (StatusCode::CONFLICT, msg),
                Error::Server(msg) => {
                    tracing::error!("Upstream error: {}", msg);
                    (StatusCode::BAD_GATEWAY, msg)
                }
                Error::Unknown(e) => {
                    tracing::error!("Internal error: {:?}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                    )
                }
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.status_and_message();

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// `axum::Json` whose rejection renders as `{"error": "Invalid request body"}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T: Serialize> IntoResponse for ApiJson<T> {
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// `axum::extract::Query` with the same rejection shape as [`ApiJson`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn render(err: ApiError) -> (StatusCode, serde_json::Value) {
        let response = err.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_user_errors_are_bad_request() {
        let (status, body) = render(Error::User("Invalid post ID".to_owned()).into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid post ID");
    }

    #[tokio::test]
    async fn test_insufficient_recipes_message() {
        let err = Error::InsufficientRecipes {
            required: 3,
            current: 2,
        };
        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "insufficient recipes to generate a plan: need at least 3, have 2"
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let cases = [
            (Error::Forbidden("no".to_owned()), StatusCode::FORBIDDEN),
            (Error::NotFound("gone".to_owned()), StatusCode::NOT_FOUND),
            (Error::Conflict("dup".to_owned()), StatusCode::CONFLICT),
            (Error::Server("imgur".to_owned()), StatusCode::BAD_GATEWAY),
        ];

        for (err, expected) in cases {
            let (status, _) = render(err.into()).await;
            assert_eq!(status, expected);
        }
    }

    #[tokio::test]
    async fn test_unknown_errors_hide_details() {
        let err = Error::Unknown(anyhow::anyhow!("disk I/O error at page 42"));
        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_invalid_body() {
        let (status, body) = render(ApiError::InvalidBody("EOF".to_owned())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid request body");
    }
}

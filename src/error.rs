use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

pub const UPSTREAM_ERROR_DETAIL: &str = "Error communicating with the API.";

/// Error returned to HTTP clients as `{"detail": "..."}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    detail: &'a str,
}

impl ApiError {
    /// Any failure talking to the classifier. The cause stays in the logs.
    pub fn upstream() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            detail: UPSTREAM_ERROR_DETAIL.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            detail: &self.detail,
        });
        (self.status, body).into_response()
    }
}

pub type ApiResult<T, E = ApiError> = Result<T, E>;

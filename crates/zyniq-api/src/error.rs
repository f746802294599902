//! HTTP error responses.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    /// Body is not valid JSON.
    BadRequest(String),
    /// Well-formed body with missing or invalid fields.
    Validation(String),
    /// Any other extractor rejection, with its own status.
    Rejected(StatusCode, String),
    /// Server-side failure. The message is shown to the caller as-is and
    /// must not carry internal detail.
    Internal(&'static str),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => ApiError::Validation(e.body_text()),
            JsonRejection::JsonSyntaxError(e) => ApiError::BadRequest(e.body_text()),
            other => ApiError::Rejected(other.status(), other.body_text()),
        }
    }
}

impl From<zyniq_core::Error> for ApiError {
    fn from(err: zyniq_core::Error) -> Self {
        match err {
            zyniq_core::Error::InvalidInput(msg) => ApiError::Validation(msg),
            other => {
                tracing::error!(error = %other, "Unhandled error in request");
                ApiError::Internal("Internal server error")
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::Rejected(status, msg) => (status, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.to_string()),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

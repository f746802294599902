//! Greeting and status check log.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use zyniq_core::{defaults, CreateStatusCheckRequest, StatusCheck};

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Greeting.
#[utoipa::path(
    get,
    path = "/api/",
    tag = "Status",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello World".to_string(),
    })
}

/// Record a status check.
#[utoipa::path(
    post,
    path = "/api/status",
    tag = "Status",
    request_body = CreateStatusCheckRequest,
    responses(
        (status = 200, description = "Recorded status check", body = StatusCheck),
        (status = 422, description = "Missing client name", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn create_status_check(
    State(state): State<AppState>,
    payload: Result<Json<CreateStatusCheckRequest>, JsonRejection>,
) -> Result<Json<StatusCheck>, ApiError> {
    let Json(req) = payload?;
    let check = state
        .status_checks
        .create(&req.client_name)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to record status check");
            ApiError::Internal("Failed to record status check")
        })?;
    Ok(Json(check))
}

/// List recorded status checks in insertion order.
#[utoipa::path(
    get,
    path = "/api/status",
    tag = "Status",
    responses(
        (status = 200, description = "Up to 1000 status checks", body = [StatusCheck]),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn list_status_checks(
    State(state): State<AppState>,
) -> Result<Json<Vec<StatusCheck>>, ApiError> {
    let checks = state
        .status_checks
        .list(defaults::STATUS_LIST_LIMIT)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to list status checks");
            ApiError::Internal("Failed to list status checks")
        })?;
    Ok(Json(checks))
}

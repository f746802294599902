//! Blueprint generation and refinement.
//!
//! Both endpoints answer 200 whenever the request is valid. Provider and
//! parse failures are absorbed by the generator and refiner.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use zyniq_core::{Blueprint, BlueprintRequest, Refinement, RefinementRequest};

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

#[derive(Debug, Serialize, ToSchema)]
pub struct BlueprintResponse {
    pub blueprint: Blueprint,
}

/// Generate a strategy blueprint.
#[utoipa::path(
    post,
    path = "/api/generate-blueprint",
    tag = "Blueprint",
    request_body = BlueprintRequest,
    responses(
        (status = 200, description = "Model or fallback blueprint", body = BlueprintResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or blank field", body = ErrorResponse)
    )
)]
pub async fn generate_blueprint(
    State(state): State<AppState>,
    payload: Result<Json<BlueprintRequest>, JsonRejection>,
) -> Result<Json<BlueprintResponse>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let blueprint = state.generator.generate(&req).await;
    Ok(Json(BlueprintResponse { blueprint }))
}

/// Answer a follow-up question about a blueprint.
#[utoipa::path(
    post,
    path = "/api/refine-blueprint",
    tag = "Blueprint",
    request_body = RefinementRequest,
    responses(
        (status = 200, description = "Model or fallback answer", body = Refinement),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing or blank field", body = ErrorResponse)
    )
)]
pub async fn refine_blueprint(
    State(state): State<AppState>,
    payload: Result<Json<RefinementRequest>, JsonRejection>,
) -> Result<Json<Refinement>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    Ok(Json(state.refiner.refine(&req).await))
}

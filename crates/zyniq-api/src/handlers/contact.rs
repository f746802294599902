//! Contact form submission.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use zyniq_core::ContactSubmission;

use crate::error::{ApiError, ErrorResponse};
use crate::state::AppState;

pub const CONTACT_RECEIVED_MESSAGE: &str = "Contact information received successfully";
pub const CONTACT_FAILED_MESSAGE: &str = "Failed to submit contact information";

#[derive(Debug, Serialize, ToSchema)]
pub struct ContactResponse {
    pub message: String,
    pub id: Uuid,
}

/// Store a contact submission with the blueprint the visitor saw.
///
/// Every call creates a new record, even for identical payloads.
#[utoipa::path(
    post,
    path = "/api/submit-contact",
    tag = "Contact",
    request_body = ContactSubmission,
    responses(
        (status = 200, description = "Stored", body = ContactResponse),
        (status = 400, description = "Malformed JSON", body = ErrorResponse),
        (status = 422, description = "Missing field", body = ErrorResponse),
        (status = 500, description = "Store failure", body = ErrorResponse)
    )
)]
pub async fn submit_contact(
    State(state): State<AppState>,
    payload: Result<Json<ContactSubmission>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError> {
    let Json(submission) = payload?;
    let field_count = submission.contact.len();

    let record = state.contacts.save(submission).await.map_err(|e| {
        error!(
            subsystem = "api",
            component = "contact",
            op = "submit",
            error = %e,
            "Contact submission failed"
        );
        ApiError::Internal(CONTACT_FAILED_MESSAGE)
    })?;

    info!(
        subsystem = "api",
        component = "contact",
        op = "submit",
        contact_id = %record.id,
        field_count,
        "Contact submission saved"
    );

    Ok(Json(ContactResponse {
        message: CONTACT_RECEIVED_MESSAGE.to_string(),
        id: record.id,
    }))
}

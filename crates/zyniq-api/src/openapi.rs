//! OpenAPI document served at `/api/openapi.json`.

use utoipa::OpenApi;

use zyniq_core::{
    Blueprint, BlueprintRequest, ContactSubmission, CreateStatusCheckRequest, Refinement,
    RefinementRequest, StatusCheck,
};

use crate::error::ErrorResponse;
use crate::handlers::{blueprint, contact, status};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "ZYNIQ Blueprint API",
        version = "2026.10.0",
        description = "AI strategy blueprints generated by a language model, with deterministic fallbacks and contact capture"
    ),
    paths(
        status::root,
        status::create_status_check,
        status::list_status_checks,
        blueprint::generate_blueprint,
        blueprint::refine_blueprint,
        contact::submit_contact,
    ),
    components(schemas(
        Blueprint,
        BlueprintRequest,
        Refinement,
        RefinementRequest,
        ContactSubmission,
        StatusCheck,
        CreateStatusCheckRequest,
        ErrorResponse,
        status::MessageResponse,
        blueprint::BlueprintResponse,
        contact::ContactResponse,
    )),
    tags(
        (name = "Blueprint", description = "Blueprint generation and refinement"),
        (name = "Contact", description = "Contact form capture"),
        (name = "Status", description = "Greeting and status check log")
    )
)]
pub struct ApiDoc;

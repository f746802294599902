//! # zyniq-api
//!
//! HTTP boundary for the ZYNIQ blueprint service.
//!
//! Routes (all under `/api`):
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/api`, `/api/` | greeting |
//! | POST, GET | `/api/status` | status check log |
//! | POST | `/api/generate-blueprint` | blueprint generation |
//! | POST | `/api/refine-blueprint` | follow-up answer |
//! | POST | `/api/submit-contact` | contact capture |
//! | GET | `/api/openapi.json`, `/api/docs` | API documentation |

pub mod config;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use zyniq_core::defaults;

pub use config::{cors_layer, parse_allowed_origins, AllowedOrigins, ServerConfig};
pub use error::{ApiError, ErrorResponse};
pub use openapi::ApiDoc;
pub use state::AppState;

/// Generates time-ordered UUIDv7 request correlation IDs.
#[derive(Clone, Default)]
pub struct MakeRequestUuidV7;

impl MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(&mut self, _request: &axum::http::Request<B>) -> Option<RequestId> {
        let id = Uuid::now_v7().to_string().parse().ok()?;
        Some(RequestId::new(id))
    }
}

/// Build the application router with its middleware stack.
pub fn build_router(state: AppState, allowed_origins: &AllowedOrigins) -> Router {
    use handlers::{blueprint, contact, status};

    Router::new()
        .route("/api", get(status::root))
        .route("/api/", get(status::root))
        .route(
            "/api/status",
            get(status::list_status_checks).post(status::create_status_check),
        )
        .route("/api/generate-blueprint", post(blueprint::generate_blueprint))
        .route("/api/refine-blueprint", post(blueprint::refine_blueprint))
        .route("/api/submit-contact", post(contact::submit_contact))
        .merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7))
        .layer(cors_layer(allowed_origins))
        .layer(RequestBodyLimitLayer::new(defaults::MAX_BODY_SIZE_BYTES))
        .with_state(state)
}

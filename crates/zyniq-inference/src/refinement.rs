//! Follow-up answers about an existing blueprint.

use std::io;
use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::Formatter;
use tracing::info;

use zyniq_core::{
    defaults, refinement_fallbacks, session_token, ChatBackend, FallbackPolicy, JsonObject,
    Refinement, RefinementRequest,
};

use crate::pipeline::{request_record, Exchange, Generated};

/// Persona for the follow-up conversation.
pub const REFINEMENT_SYSTEM_PROMPT: &str = "You are an expert AI strategist for ZYNIQ, continuing a conversation. The client has received an initial blueprint and has a follow-up question. Provide a concise, helpful answer in JSON format with a single key: 'refinement_text' containing a paragraph answering the user's question.";

/// Answers a follow-up question in the context of a prior blueprint.
///
/// Both failure classes resolve to the same apology text.
#[derive(Clone)]
pub struct BlueprintRefiner {
    backend: Arc<dyn ChatBackend>,
    fallbacks: FallbackPolicy<Refinement>,
}

impl BlueprintRefiner {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_fallbacks(backend, refinement_fallbacks())
    }

    pub fn with_fallbacks(
        backend: Arc<dyn ChatBackend>,
        fallbacks: FallbackPolicy<Refinement>,
    ) -> Self {
        Self { backend, fallbacks }
    }

    /// Build the user message sent to the model.
    ///
    /// The prior blueprint is embedded without validation, on one line with
    /// `", "` and `": "` separators.
    pub fn compose_user_message(initial_blueprint: &JsonObject, query: &str) -> String {
        let blueprint = spaced_json(initial_blueprint);
        format!(
            "Initial blueprint: {}\n\nClient's follow-up question: \"{}\"\n\nProvide a helpful answer in JSON format.",
            blueprint, query
        )
    }

    pub async fn refine(&self, request: &RefinementRequest) -> Refinement {
        self.refine_with_outcome(request).await.into_inner()
    }

    pub async fn refine_with_outcome(&self, request: &RefinementRequest) -> Generated<Refinement> {
        let session_id = session_token(defaults::REFINEMENT_SESSION_PREFIX);

        let user_text = Self::compose_user_message(&request.initial_blueprint, &request.query);

        let generated = request_record(
            self.backend.as_ref(),
            Exchange {
                component: "refinement",
                session_id: &session_id,
                system_prompt: REFINEMENT_SYSTEM_PROMPT,
                user_text: &user_text,
            },
            &self.fallbacks,
        )
        .await;

        info!(
            subsystem = "inference",
            component = "refinement",
            op = "refine",
            session_id = %session_id,
            fallback = generated.outcome.is_fallback(),
            "Refinement generated"
        );
        generated
    }
}

/// Single-line JSON with a space after every `,` and `:`.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn spaced_json(object: &JsonObject) -> String {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, SpacedFormatter);
    match object.serialize(&mut serializer) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        // Unreachable for a string-keyed map.
        Err(_) => serde_json::Value::Object(object.clone()).to_string(),
    }
}

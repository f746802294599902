//! Blueprint generation.

use std::sync::Arc;

use tracing::info;

use zyniq_core::{
    blueprint_fallbacks, defaults, session_token, Blueprint, BlueprintRequest, ChatBackend,
    FallbackPolicy,
};

use crate::pipeline::{request_record, Exchange, Generated};

/// Appended verbatim to every user query.
pub const JSON_INSTRUCTION: &str = "Respond ONLY with a valid JSON object containing 'headline', 'key_points' (array), and 'recommendation' keys.";

/// Turns a client's assessment into a strategy blueprint.
///
/// `generate` always yields a blueprint. A provider failure returns the
/// four-point "assessment complete" fallback; a reply that does not decode
/// returns the three-point "consultation recommended" fallback.
#[derive(Clone)]
pub struct BlueprintGenerator {
    backend: Arc<dyn ChatBackend>,
    fallbacks: FallbackPolicy<Blueprint>,
}

impl BlueprintGenerator {
    pub fn new(backend: Arc<dyn ChatBackend>) -> Self {
        Self::with_fallbacks(backend, blueprint_fallbacks())
    }

    pub fn with_fallbacks(
        backend: Arc<dyn ChatBackend>,
        fallbacks: FallbackPolicy<Blueprint>,
    ) -> Self {
        Self { backend, fallbacks }
    }

    /// Build the user message sent to the model.
    pub fn compose_user_message(user_query: &str) -> String {
        format!("{}\n\n{}", user_query, JSON_INSTRUCTION)
    }

    pub async fn generate(&self, request: &BlueprintRequest) -> Blueprint {
        self.generate_with_outcome(request).await.into_inner()
    }

    /// Like [`generate`](Self::generate), but reports whether the model or
    /// the fallback table produced the blueprint.
    pub async fn generate_with_outcome(&self, request: &BlueprintRequest) -> Generated<Blueprint> {
        let session_id = session_token(defaults::BLUEPRINT_SESSION_PREFIX);
        let user_text = Self::compose_user_message(&request.user_query);

        let generated = request_record(
            self.backend.as_ref(),
            Exchange {
                component: "blueprint",
                session_id: &session_id,
                system_prompt: &request.system_prompt,
                user_text: &user_text,
            },
            &self.fallbacks,
        )
        .await;

        info!(
            subsystem = "inference",
            component = "blueprint",
            op = "generate",
            session_id = %session_id,
            fallback = generated.outcome.is_fallback(),
            key_points = generated.value.key_points.len(),
            "Blueprint generated"
        );
        generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockChatBackend;
    use crate::pipeline::Outcome;
    use zyniq_core::{provider_unavailable_blueprint, unparseable_blueprint, FailureKind};

    fn request() -> BlueprintRequest {
        BlueprintRequest::new("You are an expert AI strategist.", "Logistics firm, 200 staff")
    }

    #[test]
    fn test_compose_user_message() {
        let msg = BlueprintGenerator::compose_user_message("Assess us");
        assert_eq!(
            msg,
            "Assess us\n\nRespond ONLY with a valid JSON object containing 'headline', 'key_points' (array), and 'recommendation' keys."
        );
    }

    #[tokio::test]
    async fn test_model_reply_is_returned() {
        let backend = MockChatBackend::replying(
            r#"{"headline":"H","key_points":["a","b"],"recommendation":"R"}"#,
        );
        let generator = BlueprintGenerator::new(Arc::new(backend));

        let generated = generator.generate_with_outcome(&request()).await;
        assert_eq!(generated.outcome, Outcome::Model);
        assert_eq!(generated.value, Blueprint::new("H", ["a", "b"], "R"));
    }

    #[tokio::test]
    async fn test_unparseable_reply_uses_consultation_fallback() {
        let backend = MockChatBackend::replying("not json");
        let generator = BlueprintGenerator::new(Arc::new(backend));

        let generated = generator.generate_with_outcome(&request()).await;
        assert_eq!(generated.outcome, Outcome::Fallback(FailureKind::Unparseable));
        assert_eq!(generated.value, unparseable_blueprint());
        assert_eq!(generated.value.key_points.len(), 3);
    }

    #[tokio::test]
    async fn test_provider_failure_uses_assessment_fallback() {
        let backend = MockChatBackend::failing("connection refused");
        let generator = BlueprintGenerator::new(Arc::new(backend));

        let generated = generator.generate_with_outcome(&request()).await;
        assert_eq!(
            generated.outcome,
            Outcome::Fallback(FailureKind::ProviderUnavailable)
        );
        assert_eq!(generated.value, provider_unavailable_blueprint());
        assert_eq!(generated.value.key_points.len(), 4);
    }

    #[tokio::test]
    async fn test_missing_key_uses_consultation_fallback() {
        let backend = MockChatBackend::replying(r#"{"headline":"H","key_points":["a"]}"#);
        let generator = BlueprintGenerator::new(Arc::new(backend));

        assert_eq!(generator.generate(&request()).await, unparseable_blueprint());
    }

    #[tokio::test]
    async fn test_prompts_and_session_passed_to_backend() {
        let backend = MockChatBackend::replying("not json");
        let generator = BlueprintGenerator::new(Arc::new(backend.clone()));

        generator.generate(&request()).await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].system_prompt, "You are an expert AI strategist.");
        assert!(calls[0].user_text.starts_with("Logistics firm, 200 staff\n\n"));
        assert!(calls[0].user_text.ends_with(JSON_INSTRUCTION));
        assert!(calls[0].session_id.starts_with("blueprint-"));
    }

    #[tokio::test]
    async fn test_fresh_session_per_call() {
        let backend = MockChatBackend::failing("down");
        let generator = BlueprintGenerator::new(Arc::new(backend.clone()));

        generator.generate(&request()).await;
        generator.generate(&request()).await;

        let calls = backend.calls();
        assert_eq!(calls.len(), 2);
        assert_ne!(calls[0].session_id, calls[1].session_id);
    }

    #[tokio::test]
    async fn test_custom_fallbacks() {
        let custom = FallbackPolicy::uniform(Blueprint::new("Try later", ["x"], "Soon"));
        let generator =
            BlueprintGenerator::with_fallbacks(Arc::new(MockChatBackend::failing("down")), custom);

        assert_eq!(generator.generate(&request()).await.headline, "Try later");
    }
}

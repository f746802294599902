//! Chat backend and pipeline tests against a local OpenAI-compatible stub.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zyniq_core::{
    provider_unavailable_blueprint, unparseable_blueprint, BlueprintRequest, ChatBackend, Error,
    FailureKind,
};
use zyniq_inference::openai::{OpenAIChatBackend, OpenAIConfig};
use zyniq_inference::{BlueprintGenerator, Outcome};

fn chat_response(content: &str) -> serde_json::Value {
    json!({
        "id": "chatcmpl-123",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": 10,
            "completion_tokens": 5,
            "total_tokens": 15
        }
    })
}

fn backend_for(server: &MockServer) -> OpenAIChatBackend {
    OpenAIChatBackend::new(OpenAIConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        timeout_seconds: 5,
        ..Default::default()
    })
    .expect("Failed to create backend")
}

#[tokio::test]
async fn test_send_returns_reply_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(json!({
            "model": "gpt-4o",
            "user": "blueprint-abc",
            "messages": [
                {"role": "system", "content": "You are a strategist."},
                {"role": "user", "content": "Assess us"}
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("Test response")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let result = backend
        .send("blueprint-abc", "You are a strategist.", "Assess us")
        .await;

    assert!(result.is_ok(), "Request should succeed: {:?}", result.err());
    assert_eq!(result.unwrap(), "Test response");
}

#[tokio::test]
async fn test_server_error_is_provider_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "upstream exploded", "type": "server_error"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server)
        .send("s", "sys", "u")
        .await
        .unwrap_err();

    match err {
        Error::ProviderUnavailable(msg) => {
            assert!(msg.contains("500"), "{}", msg);
            assert!(msg.contains("upstream exploded"), "{}", msg);
        }
        other => panic!("expected ProviderUnavailable, got {:?}", other),
    }
}

#[tokio::test]
async fn test_error_without_json_body_is_provider_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server)
        .send("s", "sys", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable(_)));
}

#[tokio::test]
async fn test_empty_reply_is_provider_unavailable() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response("   ")))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server)
        .send("s", "sys", "u")
        .await
        .unwrap_err();
    assert!(matches!(err, Error::ProviderUnavailable(_)));
}

#[tokio::test]
async fn test_no_retry_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let _ = backend_for(&mock_server).send("s", "sys", "u").await;
}

#[tokio::test]
async fn test_generator_decodes_provider_reply() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_response(
            r#"{"headline":"H","key_points":["a","b"],"recommendation":"R"}"#,
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let generator = BlueprintGenerator::new(Arc::new(backend_for(&mock_server)));
    let generated = generator
        .generate_with_outcome(&BlueprintRequest::new("sys", "Assess us"))
        .await;

    assert_eq!(generated.outcome, Outcome::Model);
    assert_eq!(generated.value.headline, "H");
    assert_eq!(generated.value.key_points, vec!["a", "b"]);
    assert_eq!(generated.value.recommendation, "R");
}

#[tokio::test]
async fn test_generator_prose_reply_uses_unparseable_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(chat_response("Here is your blueprint!")),
        )
        .mount(&mock_server)
        .await;

    let generator = BlueprintGenerator::new(Arc::new(backend_for(&mock_server)));
    let generated = generator
        .generate_with_outcome(&BlueprintRequest::new("sys", "Assess us"))
        .await;

    assert_eq!(generated.outcome, Outcome::Fallback(FailureKind::Unparseable));
    assert_eq!(generated.value, unparseable_blueprint());
}

#[tokio::test]
async fn test_generator_provider_error_uses_unavailable_fallback() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;

    let generator = BlueprintGenerator::new(Arc::new(backend_for(&mock_server)));
    let blueprint = generator
        .generate(&BlueprintRequest::new("sys", "Assess us"))
        .await;

    assert_eq!(blueprint, provider_unavailable_blueprint());
}

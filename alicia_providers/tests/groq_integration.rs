//! Integration tests for the Groq chat completions client.
//!
//! These tests verify:
//! 1. The request carries the bearer key, model and sampling parameters
//! 2. Each upstream failure maps onto its own `CompletionError`
//! 3. A slow upstream is reported as a timeout

use alicia_core::{ChatMessage, CompletionError, CompletionOptions, LLMProvider, Role};
use alicia_providers::GroqProvider;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn completion_body(content: &str) -> serde_json::Value {
    json!({
        "choices": [
            { "message": { "role": "assistant", "content": content } }
        ],
        "usage": { "prompt_tokens": 42, "completion_tokens": 7, "total_tokens": 49 }
    })
}

fn provider_for(server: &MockServer) -> GroqProvider {
    GroqProvider::new("gsk_test_key".to_string()).with_base_url(server.uri())
}

fn conversation() -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(Role::System, "persona"),
        ChatMessage::new(Role::User, "ça va ?"),
    ]
}

async fn respond_with_status(status: u16) -> Result<String, CompletionError> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(status))
        .mount(&server)
        .await;

    provider_for(&server)
        .chat(&conversation(), &CompletionOptions::default())
        .await
        .map(|r| r.content)
}

#[tokio::test]
async fn test_successful_completion_sends_expected_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer gsk_test_key"))
        .and(body_partial_json(json!({
            "model": "llama-3.1-8b-instant",
            "max_tokens": 150,
            "messages": [
                { "role": "system", "content": "persona" },
                { "role": "user", "content": "ça va ?" }
            ]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("  Oui et toi ?  ")))
        .expect(1)
        .mount(&server)
        .await;

    let response = provider_for(&server)
        .chat(&conversation(), &CompletionOptions::default())
        .await
        .expect("completion should succeed");

    assert_eq!(response.content, "  Oui et toi ?  ");
}

#[tokio::test]
async fn test_configured_model_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(json!({ "model": "llama-3.3-70b-versatile" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("ok")))
        .expect(1)
        .mount(&server)
        .await;

    let options = CompletionOptions {
        model: "llama-3.3-70b-versatile".to_string(),
        ..CompletionOptions::default()
    };
    let response = provider_for(&server)
        .chat(&conversation(), &options)
        .await
        .expect("completion should succeed");

    assert_eq!(response.content, "ok");
}

#[tokio::test]
async fn test_unauthorized_maps_to_unauthorized() {
    assert_eq!(
        respond_with_status(401).await,
        Err(CompletionError::Unauthorized)
    );
}

#[tokio::test]
async fn test_rate_limit_maps_to_rate_limited() {
    assert_eq!(
        respond_with_status(429).await,
        Err(CompletionError::RateLimited)
    );
}

#[tokio::test]
async fn test_other_status_is_kept() {
    assert_eq!(
        respond_with_status(500).await,
        Err(CompletionError::Status(500))
    );
}

#[tokio::test]
async fn test_missing_content_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .chat(&conversation(), &CompletionOptions::default())
        .await;

    assert!(
        matches!(result, Err(CompletionError::InvalidResponse(_))),
        "Expected InvalidResponse, got: {:?}",
        result.map(|r| r.content)
    );
}

#[tokio::test]
async fn test_non_json_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .chat(&conversation(), &CompletionOptions::default())
        .await;

    assert!(matches!(result, Err(CompletionError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_slow_upstream_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(completion_body("trop tard"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let result = provider_for(&server)
        .with_timeout(Duration::from_millis(200))
        .chat(&conversation(), &CompletionOptions::default())
        .await;

    assert_eq!(result.map(|r| r.content), Err(CompletionError::Timeout));
}

#[tokio::test]
async fn test_malformed_key_never_reaches_upstream() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion_body("hi")))
        .expect(0)
        .mount(&server)
        .await;

    let result = GroqProvider::new("not-a-groq-key".to_string())
        .with_base_url(server.uri())
        .chat(&conversation(), &CompletionOptions::default())
        .await;

    assert_eq!(
        result.map(|r| r.content),
        Err(CompletionError::MalformedCredential)
    );
}

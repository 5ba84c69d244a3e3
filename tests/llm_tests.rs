//! Wire-format tests for the Gemini completion client.

use connectwith::llm::{CompletionClient, CompletionError, GeminiClient};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn posts_system_instruction_and_decodes_candidate_text() {
    let server = MockServer::start().await;
    let response = json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": "An insight." }] } }
        ]
    });

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "systemInstruction": { "parts": [{ "text": "be brief" }] },
            "contents": [{ "role": "user", "parts": [{ "text": "hello" }] }],
            "generationConfig": { "temperature": 0.5 }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key", "gemini-2.0-flash", 0.5)
        .unwrap()
        .with_base_url(server.uri());

    let text = client.complete("be brief", "hello").await.unwrap();
    assert_eq!(text, "An insight.");
}

#[tokio::test]
async fn empty_candidates_is_a_malformed_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key", "gemini-2.0-flash", 0.5)
        .unwrap()
        .with_base_url(server.uri());

    let err = client.complete("system", "user").await.unwrap_err();
    assert!(matches!(err, CompletionError::MalformedResponse(_)));
}

#[tokio::test]
async fn non_success_status_surfaces_the_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(429).set_body_string("{\"error\": \"quota exhausted\"}"),
        )
        .mount(&server)
        .await;

    let client = GeminiClient::new("test-key", "gemini-2.0-flash", 0.5)
        .unwrap()
        .with_base_url(server.uri());

    let err = client.complete("system", "user").await.unwrap_err();
    let rendered = err.to_string();
    assert!(matches!(err, CompletionError::Api(_)));
    assert!(rendered.contains("429"));
    assert!(rendered.contains("quota exhausted"));
}

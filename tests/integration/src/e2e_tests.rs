//! End-to-end tests for the `/chat` and `/health` endpoints.

use crate::helpers::*;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn chat_returns_primary_content_on_the_wire_contract() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .and(header("authorization", format!("Bearer {GROQ_TEST_KEY}")))
        .and(body_partial_json(json!({ "model": "llama-3.3-70b-versatile" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_success("Paris.")))
        .expect(1)
        .mount(&upstream)
        .await;

    let gateway = TestGateway::spawn(vec![groq_provider(&upstream.uri())]).await;
    let response = gateway.chat("What is the capital of France?").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = TestGateway::json_body(response).await;
    assert_eq!(body["response"], "Paris.");
    assert_eq!(body["provider"], "primary");
    assert!(body["requestId"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn empty_message_is_rejected_without_touching_any_upstream() {
    let upstream = MockServer::start().await;

    // No mocks mounted; any upstream call would 404 and the test would
    // then fail the provider assertion below.
    let gateway = TestGateway::spawn(vec![groq_provider(&upstream.uri())]).await;
    let response = gateway.chat("   ").await;

    assert_eq!(response.status().as_u16(), 400);
    let body = TestGateway::json_body(response).await;
    assert!(body["error"].is_string());
    assert!(body["requestId"].is_string());
    assert_eq!(upstream.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn missing_message_field_is_a_validation_rejection() {
    let gateway = TestGateway::spawn(vec![]).await;

    let client = reqwest::Client::new();
    let response = client
        .post(format!("{}/chat", gateway.base_url))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 400);
}

#[tokio::test]
async fn chat_requests_with_no_providers_answer_503() {
    let gateway = TestGateway::spawn(vec![]).await;
    let response = gateway.chat("hello").await;

    assert_eq!(response.status().as_u16(), 503);
    let body = TestGateway::json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
    assert!(body["requestId"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_reports_ok_with_uptime() {
    let gateway = TestGateway::spawn(vec![]).await;
    let response = gateway.health().await;

    assert_eq!(response.status().as_u16(), 200);
    let body = TestGateway::json_body(response).await;
    assert_eq!(body["status"], "ok");
    assert!(body["timestamp"].is_string());
    assert!(body["uptime"].is_number());
}

#[tokio::test]
async fn gemini_requests_carry_the_key_as_a_query_parameter() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .and(query_param("key", GEMINI_TEST_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success("Hi!")))
        .expect(1)
        .mount(&upstream)
        .await;

    let gateway = TestGateway::spawn(vec![gemini_provider(&upstream.uri())]).await;
    let response = gateway.chat("hello").await;

    assert_eq!(response.status().as_u16(), 200);
    let body = TestGateway::json_body(response).await;
    assert_eq!(body["response"], "Hi!");
    assert_eq!(body["provider"], "secondary");
}

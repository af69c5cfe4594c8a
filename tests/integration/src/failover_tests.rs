//! Failover behavior across the provider chain, end to end.

use crate::helpers::*;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn primary_5xx_fails_over_to_the_secondary() {
    let groq = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("groq down"))
        .expect(1)
        .mount(&groq)
        .await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success("Backup answer")))
        .expect(1)
        .mount(&gemini)
        .await;

    let gateway = TestGateway::spawn(vec![
        groq_provider(&groq.uri()),
        gemini_provider(&gemini.uri()),
    ])
    .await;

    let response = gateway.chat("hello").await;
    assert_eq!(response.status().as_u16(), 200);

    let body = TestGateway::json_body(response).await;
    assert_eq!(body["response"], "Backup answer");
    assert_eq!(body["provider"], "secondary");
}

#[tokio::test]
async fn unreachable_primary_fails_over_to_the_secondary() {
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success("Still here")))
        .expect(1)
        .mount(&gemini)
        .await;

    // Port 1 is never listening.
    let gateway = TestGateway::spawn(vec![
        groq_provider("http://127.0.0.1:1"),
        gemini_provider(&gemini.uri()),
    ])
    .await;

    let response = gateway.chat("hello").await;
    assert_eq!(response.status().as_u16(), 200);
    let body = TestGateway::json_body(response).await;
    assert_eq!(body["provider"], "secondary");
}

#[tokio::test]
async fn empty_primary_content_fails_over_to_the_secondary() {
    let groq = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_success("")))
        .expect(1)
        .mount(&groq)
        .await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success("Filled in")))
        .expect(1)
        .mount(&gemini)
        .await;

    let gateway = TestGateway::spawn(vec![
        groq_provider(&groq.uri()),
        gemini_provider(&gemini.uri()),
    ])
    .await;

    let body = TestGateway::json_body(gateway.chat("hello").await).await;
    assert_eq!(body["response"], "Filled in");
    assert_eq!(body["provider"], "secondary");
}

#[tokio::test]
async fn slow_primary_is_abandoned_at_the_attempt_deadline() {
    let groq = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(groq_success("too late"))
                .set_delay(Duration::from_secs(30)),
        )
        .mount(&groq)
        .await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_success("In time")))
        .expect(1)
        .mount(&gemini)
        .await;

    let gateway = TestGateway::spawn_with_deadline(
        vec![groq_provider(&groq.uri()), gemini_provider(&gemini.uri())],
        Duration::from_millis(300),
    )
    .await;

    let body = TestGateway::json_body(gateway.chat("hello").await).await;
    assert_eq!(body["response"], "In time");
    assert_eq!(body["provider"], "secondary");
}

#[tokio::test]
async fn chain_exhaustion_answers_503_after_trying_every_provider() {
    let groq = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .expect(1)
        .mount(&groq)
        .await;

    Mock::given(method("POST"))
        .and(path(GEMINI_GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exceeded"))
        .expect(1)
        .mount(&gemini)
        .await;

    let gateway = TestGateway::spawn(vec![
        groq_provider(&groq.uri()),
        gemini_provider(&gemini.uri()),
    ])
    .await;

    let response = gateway.chat("hello").await;
    assert_eq!(response.status().as_u16(), 503);

    let body = TestGateway::json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("unavailable"));
    assert!(body["requestId"].is_string());
}

#[tokio::test]
async fn successful_primary_never_reaches_the_secondary() {
    let groq = MockServer::start().await;
    let gemini = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_success("First try")))
        .expect(1)
        .mount(&groq)
        .await;

    let gateway = TestGateway::spawn(vec![
        groq_provider(&groq.uri()),
        gemini_provider(&gemini.uri()),
    ])
    .await;

    let body = TestGateway::json_body(gateway.chat("hello").await).await;
    assert_eq!(body["provider"], "primary");
    assert_eq!(gemini.received_requests().await.unwrap().len(), 0);
}

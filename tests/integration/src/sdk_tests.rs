//! SDK retry controller exercised against a live gateway.

use crate::helpers::*;
use gateway_sdk::{Client, Error};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sdk_client(base_url: &str) -> Client {
    Client::builder()
        .base_url(base_url)
        .retry_base_delay(Duration::from_millis(20))
        .build()
        .unwrap()
}

#[tokio::test]
async fn invoke_returns_the_gateway_reply() {
    let upstream = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_success("Hello from SDK")))
        .mount(&upstream)
        .await;

    let gateway = TestGateway::spawn(vec![groq_provider(&upstream.uri())]).await;
    let reply = sdk_client(&gateway.base_url).invoke("hi").await.unwrap();

    assert_eq!(reply, "Hello from SDK");
}

#[tokio::test]
async fn invoke_retries_through_a_transient_upstream_outage() {
    let upstream = MockServer::start().await;

    // The first gateway attempt exhausts its chain (503); the upstream
    // recovers before the SDK's retry.
    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("flaky"))
        .up_to_n_times(1)
        .mount(&upstream)
        .await;

    Mock::given(method("POST"))
        .and(path(GROQ_CHAT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(groq_success("Recovered")))
        .mount(&upstream)
        .await;

    let gateway = TestGateway::spawn(vec![groq_provider(&upstream.uri())]).await;
    let reply = sdk_client(&gateway.base_url).invoke("hi").await.unwrap();

    assert_eq!(reply, "Recovered");
}

#[tokio::test]
async fn invoke_surfaces_validation_rejections_without_retrying() {
    let gateway = TestGateway::spawn(vec![]).await;

    let error = sdk_client(&gateway.base_url).invoke("").await.unwrap_err();
    match error {
        Error::Validation { request_id, .. } => assert!(request_id.is_some()),
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[tokio::test]
async fn invoke_exhausts_retries_against_a_dead_chain() {
    let gateway = TestGateway::spawn(vec![]).await;

    let error = sdk_client(&gateway.base_url).invoke("hi").await.unwrap_err();
    match error {
        Error::RetriesExhausted { attempts, last } => {
            assert_eq!(attempts, 3);
            assert!(matches!(*last, Error::Unavailable { .. }));
        }
        other => panic!("expected RetriesExhausted, got {other:?}"),
    }
}

#[tokio::test]
async fn health_round_trips_through_the_sdk() {
    let gateway = TestGateway::spawn(vec![]).await;

    let health = sdk_client(&gateway.base_url).health().await.unwrap();
    assert_eq!(health.status, "ok");
}

//! Test helper utilities for integration tests.

use gateway_core::CompletionProvider;
use gateway_dispatch::{DispatcherConfig, RequestDispatcher};
use gateway_providers::{GeminiConfig, GeminiProvider, GroqConfig, GroqProvider};
use gateway_server::{create_router, AppState};
use once_cell::sync::Lazy;
use reqwest::{Client, Response};
use secrecy::SecretString;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Credential wired into the mock Groq upstream.
pub const GROQ_TEST_KEY: &str = "gsk-test";
/// Credential wired into the mock Gemini upstream.
pub const GEMINI_TEST_KEY: &str = "gm-test";
/// Path the Groq adapter posts to, relative to its base URL.
pub const GROQ_CHAT_PATH: &str = "/chat/completions";
/// Path the Gemini adapter posts to, relative to its base URL.
pub const GEMINI_GENERATE_PATH: &str = "/models/gemini-1.5-flash:generateContent";

/// Initialize tracing for tests (only once, opt-in via `TEST_LOG`).
static TRACING: Lazy<()> = Lazy::new(|| {
    if std::env::var("TEST_LOG").is_ok() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
});

/// Initialize tracing for tests.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Build the primary adapter against a mock upstream.
pub fn groq_provider(base_url: &str) -> Arc<dyn CompletionProvider> {
    let config = GroqConfig::new(SecretString::new(GROQ_TEST_KEY.to_string()))
        .with_base_url(base_url);
    Arc::new(GroqProvider::new(config).expect("groq provider"))
}

/// Build the secondary adapter against a mock upstream.
pub fn gemini_provider(base_url: &str) -> Arc<dyn CompletionProvider> {
    let config = GeminiConfig::new(SecretString::new(GEMINI_TEST_KEY.to_string()))
        .with_base_url(base_url);
    Arc::new(GeminiProvider::new(config).expect("gemini provider"))
}

/// A successful Groq chat completion body.
pub fn groq_success(content: &str) -> Value {
    json!({
        "choices": [{ "message": { "role": "assistant", "content": content } }]
    })
}

/// A successful Gemini generateContent body.
pub fn gemini_success(content: &str) -> Value {
    json!({
        "candidates": [{ "content": { "parts": [{ "text": content }] } }]
    })
}

/// Gateway instance spawned on a local ephemeral port.
pub struct TestGateway {
    /// Address the gateway is listening on.
    pub addr: SocketAddr,
    /// Base URL for requests.
    pub base_url: String,
    client: Client,
    shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestGateway {
    /// Spawn a gateway over the given provider chain.
    pub async fn spawn(providers: Vec<Arc<dyn CompletionProvider>>) -> Self {
        Self::spawn_with_deadline(providers, Duration::from_secs(5)).await
    }

    /// Spawn a gateway with a custom per-attempt deadline.
    pub async fn spawn_with_deadline(
        providers: Vec<Arc<dyn CompletionProvider>>,
        attempt_deadline: Duration,
    ) -> Self {
        init_tracing();

        let dispatcher = RequestDispatcher::new(
            providers,
            DispatcherConfig {
                attempt_deadline,
                request_timeout: Duration::from_secs(30),
            },
        );
        let router = create_router(AppState::new(dispatcher));

        let listener = TcpListener::bind(("127.0.0.1", 0))
            .await
            .expect("bind test listener");
        let addr = listener.local_addr().expect("local addr");

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(async move {
            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = shutdown_rx.await;
                })
                .await
                .expect("server error");
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("test client");

        Self {
            addr,
            base_url: format!("http://{addr}"),
            client,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    /// POST a chat message.
    pub async fn chat(&self, message: &str) -> Response {
        self.client
            .post(format!("{}/chat", self.base_url))
            .json(&json!({ "message": message }))
            .send()
            .await
            .expect("chat request")
    }

    /// GET the health endpoint.
    pub async fn health(&self) -> Response {
        self.client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .expect("health request")
    }

    /// Decode a response body as JSON.
    pub async fn json_body(response: Response) -> Value {
        response.json().await.expect("json body")
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

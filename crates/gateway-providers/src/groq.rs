//! Groq provider adapter (OpenAI-compatible chat completions).
//!
//! Primary provider in the fallback chain. Speaks
//! `POST {base}/chat/completions` with bearer authentication and extracts
//! `choices[0].message.content` from the response.

use async_trait::async_trait;
use gateway_core::{CompletionProvider, ProviderFailure, ProviderRole};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1";
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";
const SYSTEM_PROMPT: &str = "You are a helpful and versatile AI assistant. \
    You answer all questions to the best of your ability. Be concise and friendly.";

/// Groq adapter configuration.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// API key used as the bearer credential.
    pub api_key: SecretString,
    /// Base URL of the OpenAI-compatible API.
    pub base_url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// TCP connect timeout. The overall attempt deadline is enforced by
    /// the dispatcher's racer, not by the HTTP client.
    pub connect_timeout: Duration,
}

impl GroqConfig {
    /// Create a configuration with the default endpoint and model.
    #[must_use]
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            connect_timeout: Duration::from_secs(10),
        }
    }

    /// Override the base URL (used by tests against a local mock).
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model identifier.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// The primary completion provider.
pub struct GroqProvider {
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Create the adapter.
    ///
    /// # Errors
    /// Returns a transport failure if the HTTP client cannot be built.
    pub fn new(config: GroqConfig) -> Result<Self, ProviderFailure> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ProviderFailure::transport(format!("http client: {e}")))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionProvider for GroqProvider {
    fn role(&self) -> ProviderRole {
        ProviderRole::Primary
    }

    async fn complete(&self, text: &str) -> Result<String, ProviderFailure> {
        let body = ChatCompletionRequest {
            model: &self.config.model,
            messages: vec![
                Message {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                Message {
                    role: "user",
                    content: text,
                },
            ],
            temperature: 1.1,
            max_tokens: 700,
            presence_penalty: 0.0,
            frequency_penalty: 0.3,
        };

        trace!(model = %self.config.model, "sending chat completion request");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::status(status.as_u16(), truncate(&detail)));
        }

        let payload: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::malformed(e.to_string()))?;

        let content = payload
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ProviderFailure::EmptyContent);
        }

        Ok(content)
    }
}

/// Map a reqwest send error to the normalized failure.
pub(crate) fn map_send_error(error: reqwest::Error) -> ProviderFailure {
    ProviderFailure::transport(error.to_string())
}

/// Bound upstream error bodies so log lines stay readable.
pub(crate) fn truncate(detail: &str) -> String {
    const MAX: usize = 256;
    let trimmed = detail.trim();
    if trimmed.len() <= MAX {
        trimmed.to_string()
    } else {
        let cut = trimmed
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map_or(0, |(i, c)| i + c.len_utf8());
        format!("{}…", &trimmed[..cut])
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    max_tokens: u32,
    presence_penalty: f32,
    frequency_penalty: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

//! Google Gemini provider adapter (`generateContent`).
//!
//! Secondary provider in the fallback chain. Speaks
//! `POST {base}/models/{model}:generateContent?key=…` and joins the text
//! parts of the first candidate.

use async_trait::async_trait;
use gateway_core::{CompletionProvider, ProviderFailure, ProviderRole};
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::trace;

use crate::groq::{map_send_error, truncate};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Gemini adapter configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key passed as the `key` query parameter.
    pub api_key: SecretString,
    /// Base URL of the generative language API.
    pub base_url: String,
    /// Model identifier addressed in the URL.
    pub model: String,
    /// TCP connect timeout. The overall attempt deadline is enforced by
    /// the dispatcher's racer, not by the HTTP client.
    pub connect_timeout: Duration,
}

impl GeminiConfig {
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

/// The secondary completion provider.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Create the adapter.
    ///
    /// # Errors
    /// Returns a transport failure if the HTTP client cannot be built.
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderFailure> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .build()
            .map_err(|e| ProviderFailure::transport(format!("http client: {e}")))?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    fn role(&self) -> ProviderRole {
        ProviderRole::Secondary
    }

    async fn complete(&self, text: &str) -> Result<String, ProviderFailure> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }],
        };

        trace!(model = %self.config.model, "sending generateContent request");

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.expose_secret().as_str())])
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(ProviderFailure::status(status.as_u16(), truncate(&detail)));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ProviderFailure::malformed(e.to_string()))?;

        let content = payload
            .candidates
            .into_iter()
            .next()
            .map(|candidate| {
                candidate
                    .content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if content.trim().is_empty() {
            return Err(ProviderFailure::EmptyContent);
        }

        Ok(content)
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

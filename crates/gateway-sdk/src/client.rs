//! HTTP client with the caller-side retry controller.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Client for the chat failover gateway.
///
/// # Example
///
/// ```rust,no_run
/// use gateway_sdk::Client;
///
/// #[tokio::main]
/// async fn main() -> Result<(), gateway_sdk::Error> {
///     let client = Client::builder()
///         .base_url("http://localhost:3001")
///         .build()?;
///
///     let reply = client.invoke("hello").await?;
///     println!("{reply}");
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    config: Arc<ClientConfig>,
}

/// Successful `POST /chat` reply.
#[derive(Debug, Deserialize)]
struct ChatReply {
    response: String,
}

/// Error body shape shared by the gateway's failure responses.
#[derive(Debug, Deserialize)]
struct ErrorReply {
    error: Option<String>,
    #[serde(rename = "requestId")]
    request_id: Option<String>,
}

/// `GET /health` reply.
#[derive(Debug, Deserialize)]
pub struct HealthReply {
    /// Reported status, `"ok"` when healthy.
    pub status: String,
    /// Seconds since the gateway started.
    pub uptime: u64,
}

impl Client {
    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::configuration(format!("failed to create http client: {e}")))?;

        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    /// Send one message through the gateway, retrying transient failures.
    ///
    /// Attempts are strictly sequential: up to `max_retries` resubmissions
    /// after the first call, waiting `base * 2^attempt` between attempts.
    /// A validation rejection is surfaced immediately with zero retries;
    /// a spent budget is surfaced as [`Error::RetriesExhausted`], whose
    /// message is the user-facing one. The budget is local to this call,
    /// so the next invocation always starts fresh.
    pub async fn invoke(&self, text: &str) -> Result<String> {
        let max_attempts = self.config.max_retries + 1;
        let mut attempt = 0u32;

        loop {
            match self.send_once(text).await {
                Ok(reply) => return Ok(reply.response),
                Err(error) => {
                    if !error.is_transient() {
                        return Err(error);
                    }
                    if attempt + 1 >= max_attempts {
                        return Err(Error::retries_exhausted(max_attempts, error));
                    }

                    let delay = backoff_delay(self.config.retry_base_delay, attempt);
                    debug!(
                        attempt = attempt + 1,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "transient gateway failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    /// Check the gateway's health endpoint.
    pub async fn health(&self) -> Result<HealthReply> {
        let url = self.url("/health")?;
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        response
            .json()
            .await
            .map_err(|e| Error::parse(e.to_string()))
    }

    async fn send_once(&self, text: &str) -> Result<ChatReply> {
        let url = self.url("/chat")?;

        let response = self
            .http
            .post(url)
            .json(&json!({ "message": text }))
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) {
            return response
                .json()
                .await
                .map_err(|e| Error::parse(e.to_string()));
        }

        let reply: ErrorReply = response.json().await.unwrap_or(ErrorReply {
            error: None,
            request_id: None,
        });
        let message = reply.error.unwrap_or_else(|| format!("HTTP {status}"));

        Err(match status {
            400 => Error::Validation {
                message,
                request_id: reply.request_id,
            },
            503 => Error::Unavailable {
                message,
                request_id: reply.request_id,
            },
            _ => Error::Api {
                status,
                message,
                request_id: reply.request_id,
            },
        })
    }

    fn url(&self, path: &str) -> Result<Url> {
        self.config
            .base_url
            .join(path)
            .map_err(|e| Error::configuration(format!("invalid url path {path:?}: {e}")))
    }

    fn map_reqwest_error(&self, error: reqwest::Error) -> Error {
        if error.is_timeout() {
            Error::Timeout {
                duration_ms: self.config.timeout.as_millis() as u64,
            }
        } else {
            Error::Connection {
                message: error.to_string(),
            }
        }
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.config.base_url)
            .field("max_retries", &self.config.max_retries)
            .finish()
    }
}

/// Exponential backoff delay for the given attempt index, saturating
/// instead of overflowing for very large retry budgets.
fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base.saturating_mul(2u32.checked_pow(attempt).unwrap_or(u32::MAX))
}

/// Builder for creating a [`Client`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<Url>,
    timeout: Option<Duration>,
    max_retries: Option<u32>,
    retry_base_delay: Option<Duration>,
}

impl ClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway base URL.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Self {
        self.base_url = Url::parse(url.as_ref()).ok();
        self
    }

    /// Set the per-attempt timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Set the maximum number of retries.
    pub fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Set the base backoff delay.
    pub fn retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = Some(delay);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<Client> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse("http://localhost:3001")
                .map_err(|e| Error::configuration(e.to_string()))?,
        };

        Client::new(ClientConfig {
            base_url,
            timeout: self.timeout.unwrap_or(ClientConfig::DEFAULT_TIMEOUT),
            max_retries: self.max_retries.unwrap_or(ClientConfig::DEFAULT_MAX_RETRIES),
            retry_base_delay: self
                .retry_base_delay
                .unwrap_or(ClientConfig::DEFAULT_RETRY_BASE_DELAY),
        })
    }
}

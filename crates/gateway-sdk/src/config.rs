//! Client configuration.

use std::time::Duration;
use url::Url;

/// Configuration for the gateway client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the gateway.
    pub base_url: Url,
    /// Per-attempt timeout, independent of the gateway's internal
    /// deadlines.
    pub timeout: Duration,
    /// Maximum number of retries after the first attempt.
    pub max_retries: u32,
    /// Base backoff delay; attempt `n` waits `base * 2^n` before retrying.
    pub retry_base_delay: Duration,
}

impl ClientConfig {
    /// Default per-attempt timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    /// Default retry budget (3 attempts total).
    pub const DEFAULT_MAX_RETRIES: u32 = 2;
    /// Default backoff base delay.
    pub const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
}

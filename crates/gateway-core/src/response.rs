//! Success values produced by the gateway.

use crate::types::{ProviderRole, RequestId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;

/// Outcome of one successful provider attempt.
///
/// Produced exactly once per attempt that completes within its deadline;
/// consumed by the dispatcher to build the terminal [`GatewayResponse`].
#[derive(Debug, Clone)]
pub struct ProviderResult {
    /// Which provider produced the completion.
    pub provider: ProviderRole,
    /// The completion text.
    pub content: String,
    /// Wall-clock duration of the attempt.
    pub elapsed: Duration,
}

/// Terminal success value for one request.
///
/// At most one is produced per inbound call. Serializes to the wire shape
/// `{ response, provider, requestId, timestamp }`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    /// The completion text.
    #[serde(rename = "response")]
    pub content: String,
    /// Provenance of the completion.
    pub provider: ProviderRole,
    /// Correlation identifier threaded from the inbound request.
    pub request_id: RequestId,
    /// When the response was produced.
    pub timestamp: DateTime<Utc>,
}

impl GatewayResponse {
    /// Build the terminal response from a successful attempt.
    #[must_use]
    pub fn from_result(request_id: RequestId, result: ProviderResult) -> Self {
        Self {
            content: result.content,
            provider: result.provider,
            request_id,
            timestamp: Utc::now(),
        }
    }
}

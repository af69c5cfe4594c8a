//! Terminal error taxonomy for the gateway.
//!
//! Individual attempt failures are absorbed inside the dispatcher; only the
//! values in this module ever cross the gateway boundary.

use crate::types::{ProviderRole, RequestId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Classified cause of one failed provider attempt.
///
/// This is the user-safe label attached to terminal errors and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The attempt exceeded its deadline.
    Timeout,
    /// The upstream could not be reached at all.
    Unreachable,
    /// The upstream answered with an error status or an undecodable payload.
    ProviderError,
    /// The upstream answered successfully but with no usable content.
    EmptyResponse,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("timeout"),
            Self::Unreachable => f.write_str("unreachable"),
            Self::ProviderError => f.write_str("provider_error"),
            Self::EmptyResponse => f.write_str("empty_response"),
        }
    }
}

/// Terminal failure value for one request.
///
/// Exactly one of [`crate::GatewayResponse`] or `GatewayError` is produced
/// per inbound call.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The caller submitted an invalid request. Never retried.
    #[error("invalid request: {message}")]
    Validation {
        /// Correlation identifier of the rejected request.
        request_id: RequestId,
        /// User-safe description of the validation failure.
        message: String,
        /// When the rejection was produced.
        timestamp: DateTime<Utc>,
    },

    /// A provider attempt failed terminally with no fallback remaining.
    #[error("{kind} from {provider}: {message}")]
    Upstream {
        /// Correlation identifier of the failed request.
        request_id: RequestId,
        /// Which attempt produced the failure.
        provider: ProviderRole,
        /// Classified cause of the failure.
        kind: FailureKind,
        /// User-safe description of the failure.
        message: String,
        /// When the failure was produced.
        timestamp: DateTime<Utc>,
    },

    /// Every configured provider was tried and failed, or none is configured.
    #[error("all providers exhausted: {message}")]
    Exhausted {
        /// Correlation identifier of the failed request.
        request_id: RequestId,
        /// Summary of the last failure observed, or why no attempt was made.
        message: String,
        /// Classified cause of the last attempt, when one was made.
        last_kind: Option<FailureKind>,
        /// Provider of the last attempt, when one was made.
        last_provider: Option<ProviderRole>,
        /// When the exhaustion was declared.
        timestamp: DateTime<Utc>,
    },

    /// A programming or configuration fault. Reserved for genuine bugs.
    #[error("internal gateway fault: {message}")]
    Internal {
        /// Correlation identifier of the affected request.
        request_id: RequestId,
        /// Full fault detail; logged server-side, never sent to clients.
        message: String,
        /// When the fault was observed.
        timestamp: DateTime<Utc>,
    },
}

impl GatewayError {
    /// Create a validation error.
    pub fn validation(request_id: RequestId, message: impl Into<String>) -> Self {
        Self::Validation {
            request_id,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create a terminal upstream error for one attempt.
    pub fn upstream(
        request_id: RequestId,
        provider: ProviderRole,
        kind: FailureKind,
        message: impl Into<String>,
    ) -> Self {
        Self::Upstream {
            request_id,
            provider,
            kind,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Create an exhaustion error summarizing the last attempt.
    pub fn exhausted(
        request_id: RequestId,
        message: impl Into<String>,
        last: Option<(ProviderRole, FailureKind)>,
    ) -> Self {
        Self::Exhausted {
            request_id,
            message: message.into(),
            last_kind: last.map(|(_, kind)| kind),
            last_provider: last.map(|(provider, _)| provider),
            timestamp: Utc::now(),
        }
    }

    /// Create an internal error.
    pub fn internal(request_id: RequestId, message: impl Into<String>) -> Self {
        Self::Internal {
            request_id,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    /// Correlation identifier carried by this error.
    #[must_use]
    pub fn request_id(&self) -> &RequestId {
        match self {
            Self::Validation { request_id, .. }
            | Self::Upstream { request_id, .. }
            | Self::Exhausted { request_id, .. }
            | Self::Internal { request_id, .. } => request_id,
        }
    }

    /// The provider whose attempt produced this error, when applicable.
    #[must_use]
    pub fn provider(&self) -> Option<ProviderRole> {
        match self {
            Self::Upstream { provider, .. } => Some(*provider),
            Self::Exhausted { last_provider, .. } => *last_provider,
            _ => None,
        }
    }

    /// When the error was produced.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Validation { timestamp, .. }
            | Self::Upstream { timestamp, .. }
            | Self::Exhausted { timestamp, .. }
            | Self::Internal { timestamp, .. } => *timestamp,
        }
    }
}

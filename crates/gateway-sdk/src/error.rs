//! Error types for the gateway SDK.

use thiserror::Error;

/// Result type for SDK operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when calling the gateway.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error during client setup.
    #[error("configuration error: {message}")]
    Configuration {
        /// Description of the configuration issue.
        message: String,
    },

    /// The gateway rejected the request as invalid. Never retried.
    #[error("invalid request: {message}")]
    Validation {
        /// Error message from the gateway.
        message: String,
        /// Correlation id from the gateway, when present.
        request_id: Option<String>,
    },

    /// The gateway answered with an unexpected error status.
    #[error("gateway error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message from the gateway.
        message: String,
        /// Correlation id from the gateway, when present.
        request_id: Option<String>,
    },

    /// The gateway reported that no provider is available.
    #[error("gateway unavailable: {message}")]
    Unavailable {
        /// Error message from the gateway.
        message: String,
        /// Correlation id from the gateway, when present.
        request_id: Option<String>,
    },

    /// The attempt exceeded the client-side timeout.
    #[error("request timed out after {duration_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        duration_ms: u64,
    },

    /// The gateway could not be reached.
    #[error("connection error: {message}")]
    Connection {
        /// Description of the connection failure.
        message: String,
    },

    /// The response body could not be parsed.
    #[error("failed to parse response: {message}")]
    Parse {
        /// Description of the parse failure.
        message: String,
    },

    /// The retry budget is spent. The user-facing terminal failure.
    #[error("service unavailable after {attempts} attempts, please try again later")]
    RetriesExhausted {
        /// Total attempts made, including the first.
        attempts: u32,
        /// The failure of the final attempt.
        #[source]
        last: Box<Error>,
    },
}

impl Error {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    /// Wrap the last failure once the retry budget is spent.
    pub fn retries_exhausted(attempts: u32, last: Self) -> Self {
        Self::RetriesExhausted {
            attempts,
            last: Box::new(last),
        }
    }

    /// Whether retrying the whole call might succeed.
    ///
    /// Timeouts, connection failures, and 5xx-class gateway errors are
    /// transient; a validation rejection is terminal.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection { .. } | Self::Unavailable { .. } => true,
            Self::Api { status, .. } => (500..600).contains(status),
            _ => false,
        }
    }
}

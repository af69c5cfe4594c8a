//! The completion provider abstraction.

use crate::types::ProviderRole;
use async_trait::async_trait;
use thiserror::Error;

/// Failure raised by a provider adapter.
///
/// Every failure mode an adapter can encounter normalizes to one of these
/// variants; no transport or decoding error type escapes an adapter.
#[derive(Debug, Clone, Error)]
pub enum ProviderFailure {
    /// The upstream could not be reached (connect, DNS, TLS, broken pipe).
    #[error("transport failure: {message}")]
    Transport {
        /// Description of the transport-level failure.
        message: String,
    },

    /// The upstream answered with a non-success status.
    #[error("upstream returned {code}: {message}")]
    Status {
        /// HTTP status code reported by the upstream.
        code: u16,
        /// Error body or status text from the upstream.
        message: String,
    },

    /// The upstream answered 2xx but the payload could not be decoded.
    #[error("malformed upstream payload: {message}")]
    Malformed {
        /// Description of the decoding failure.
        message: String,
    },

    /// The upstream answered 2xx but the content field was empty or absent.
    #[error("upstream returned an empty completion")]
    EmptyContent,
}

impl ProviderFailure {
    /// Create a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create a status failure.
    pub fn status(code: u16, message: impl Into<String>) -> Self {
        Self::Status {
            code,
            message: message.into(),
        }
    }

    /// Create a malformed-payload failure.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }

    /// The upstream HTTP status, when one was received.
    #[must_use]
    pub fn status_hint(&self) -> Option<u16> {
        match self {
            Self::Status { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// A text-completion capability behind one upstream provider.
///
/// Adapters differ only in how they translate the inbound text into a
/// provider-specific call and how they extract the textual result.
/// Adapters are stateless, reentrant clients: one instance is constructed
/// at startup and shared across concurrent requests without locking.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Position of this provider in the fallback chain.
    fn role(&self) -> ProviderRole;

    /// Complete the given text, or fail with a normalized provider failure.
    async fn complete(&self, text: &str) -> Result<String, ProviderFailure>;
}

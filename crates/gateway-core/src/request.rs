//! Inbound request model.

use crate::types::RequestId;
use chrono::{DateTime, Utc};

/// One inbound completion request.
///
/// Created once per call and immutable afterwards. The text is stored
/// trimmed; whether it is empty is the dispatcher's validation concern.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    /// Correlation identifier for this request.
    pub id: RequestId,
    /// The message text, trimmed of surrounding whitespace.
    pub text: String,
    /// When the gateway accepted the request.
    pub received_at: DateTime<Utc>,
}

impl ChatRequest {
    /// Create a request with a freshly generated identifier.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_id(RequestId::generate(), text)
    }

    /// Create a request with an explicit identifier.
    ///
    /// Used by the HTTP layer, which mints the identifier before the
    /// request body is parsed so failures stay correlatable.
    #[must_use]
    pub fn with_id(id: RequestId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into().trim().to_string(),
            received_at: Utc::now(),
        }
    }

    /// Whether the request carries any text at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

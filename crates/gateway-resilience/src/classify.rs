//! Failure classification and fallback policy.

use crate::timeout::AttemptFailure;
use gateway_core::{FailureKind, ProviderFailure};

/// Classification of one attempt failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// The user-safe taxonomy entry for this failure.
    pub kind: FailureKind,
    /// Whether the dispatcher should try the next provider.
    pub fallback_eligible: bool,
}

/// Maps raw attempt failures to the taxonomy and the fallback decision.
///
/// Every current failure kind is fallback-eligible: a failure on one
/// provider carries no information about another provider's health. The
/// classifier exists to produce a clean `kind` for the terminal error and
/// for the logs, not to block fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorClassifier;

impl ErrorClassifier {
    /// Create a classifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Classify one attempt failure.
    #[must_use]
    pub fn classify(&self, failure: &AttemptFailure) -> Classification {
        let kind = match failure {
            AttemptFailure::Timeout { .. } => FailureKind::Timeout,
            AttemptFailure::Provider(provider) => match provider {
                ProviderFailure::Transport { .. } => FailureKind::Unreachable,
                ProviderFailure::Status { .. } | ProviderFailure::Malformed { .. } => {
                    FailureKind::ProviderError
                }
                ProviderFailure::EmptyContent => FailureKind::EmptyResponse,
            },
        };

        Classification {
            kind,
            fallback_eligible: true,
        }
    }
}

//! Deadline racing for provider attempts.

use gateway_core::ProviderFailure;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;

/// Failure of one deadline-bounded provider attempt.
///
/// Internal between the racer and the dispatcher; never exposed on the
/// gateway boundary.
#[derive(Debug, Clone, Error)]
pub enum AttemptFailure {
    /// The attempt did not complete within its deadline.
    #[error("attempt timed out after {deadline:?}")]
    Timeout {
        /// The deadline that was exceeded.
        deadline: Duration,
    },

    /// The provider itself failed within the deadline.
    #[error(transparent)]
    Provider(#[from] ProviderFailure),
}

/// Races a single provider call against a wall-clock deadline.
///
/// The call future and the deadline timer run concurrently; whichever
/// settles first determines the outcome. On timeout the call future is
/// dropped, which cancels the underlying HTTP request where the transport
/// supports it, and guarantees the late result is never delivered.
#[derive(Debug, Clone, Copy)]
pub struct TimeoutRacer {
    deadline: Duration,
}

impl TimeoutRacer {
    /// Create a racer with a fixed per-attempt deadline.
    #[must_use]
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// The per-attempt deadline.
    #[must_use]
    pub fn deadline(&self) -> Duration {
        self.deadline
    }

    /// Run one call, yielding its result or a timeout failure.
    ///
    /// The caller is unblocked at the deadline regardless of whether the
    /// underlying call can be forcibly cancelled.
    pub async fn race<F>(&self, call: F) -> Result<String, AttemptFailure>
    where
        F: Future<Output = Result<String, ProviderFailure>> + Send,
    {
        match tokio::time::timeout(self.deadline, call).await {
            Ok(outcome) => outcome.map_err(AttemptFailure::from),
            Err(_) => Err(AttemptFailure::Timeout {
                deadline: self.deadline,
            }),
        }
    }
}

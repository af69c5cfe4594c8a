//! Shared application state.

use gateway_dispatch::RequestDispatcher;
use std::sync::Arc;
use std::time::Instant;

/// State shared by all request handlers.
///
/// Cheap to clone; everything inside is read-only after startup, so
/// concurrent requests need no locking.
#[derive(Clone)]
pub struct AppState {
    /// The request dispatcher over the configured provider chain.
    pub dispatcher: Arc<RequestDispatcher>,
    /// Process start time, reported as uptime by the health endpoint.
    pub started_at: Instant,
}

impl AppState {
    /// Create state over a dispatcher.
    #[must_use]
    pub fn new(dispatcher: RequestDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
            started_at: Instant::now(),
        }
    }

    /// Seconds since the server started.
    #[must_use]
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}

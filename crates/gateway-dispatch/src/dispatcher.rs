//! The request dispatcher.

use gateway_core::{
    ChatRequest, CompletionProvider, FailureKind, GatewayError, GatewayResponse, GatewayResult,
    ProviderResult, ProviderRole,
};
use gateway_resilience::{ErrorClassifier, TimeoutRacer};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Dispatcher configuration.
#[derive(Debug, Clone, Copy)]
pub struct DispatcherConfig {
    /// Wall-clock deadline applied to every individual provider attempt.
    ///
    /// Must be strictly less than the end-to-end request budget; the
    /// configuration layer validates that relation at load time.
    pub attempt_deadline: Duration,
    /// End-to-end budget for one inbound request, bounding the whole
    /// chain walk. A request that is still unresolved at the budget is
    /// declared exhausted, regardless of how many attempts remain.
    pub request_timeout: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            attempt_deadline: Duration::from_secs(25),
            request_timeout: Duration::from_secs(60),
        }
    }
}

/// Orchestrates one completion request across the provider fallback chain.
///
/// The chain is fixed at construction and iterated strictly in priority
/// order, never concurrently; no provider is invoked more than once per
/// request. Exactly one of [`GatewayResponse`] / [`GatewayError`] is
/// produced per call.
pub struct RequestDispatcher {
    providers: Vec<Arc<dyn CompletionProvider>>,
    racer: TimeoutRacer,
    classifier: ErrorClassifier,
    request_timeout: Duration,
}

impl RequestDispatcher {
    /// Create a dispatcher over an ordered provider chain.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn CompletionProvider>>, config: DispatcherConfig) -> Self {
        Self {
            providers,
            racer: TimeoutRacer::new(config.attempt_deadline),
            classifier: ErrorClassifier::new(),
            request_timeout: config.request_timeout,
        }
    }

    /// Number of providers available for dispatch.
    #[must_use]
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }

    /// Dispatch one request through the fallback chain.
    ///
    /// The whole chain walk is bounded by the end-to-end request budget;
    /// a request still unresolved at the budget is declared exhausted
    /// even if untried providers remain.
    ///
    /// # Errors
    /// Returns `Validation` for empty input (no adapter contacted),
    /// `Exhausted` when no provider is configured, every attempt failed,
    /// or the request budget ran out, and `Upstream` when an attempt
    /// fails terminally with fallback disallowed.
    pub async fn dispatch(&self, request: &ChatRequest) -> GatewayResult<GatewayResponse> {
        if request.is_empty() {
            warn!(request_id = %request.id, "rejected empty message");
            return Err(GatewayError::validation(
                request.id.clone(),
                "message is required and must be a non-empty string",
            ));
        }

        if self.providers.is_empty() {
            error!(request_id = %request.id, "no providers configured");
            return Err(GatewayError::exhausted(
                request.id.clone(),
                "no providers configured",
                None,
            ));
        }

        match tokio::time::timeout(self.request_timeout, self.walk_chain(request)).await {
            Ok(outcome) => outcome,
            Err(_) => {
                error!(
                    request_id = %request.id,
                    budget_ms = self.request_timeout.as_millis() as u64,
                    "request budget exhausted before the chain resolved"
                );
                Err(GatewayError::exhausted(
                    request.id.clone(),
                    "end-to-end request budget exhausted",
                    None,
                ))
            }
        }
    }

    async fn walk_chain(&self, request: &ChatRequest) -> GatewayResult<GatewayResponse> {
        let mut last_failure: Option<(ProviderRole, FailureKind, String)> = None;

        for (index, provider) in self.providers.iter().enumerate() {
            let role = provider.role();
            let remaining = self.providers.len() - index - 1;
            let started = Instant::now();

            let outcome = self.racer.race(provider.complete(&request.text)).await;
            let elapsed = started.elapsed();

            match outcome {
                Ok(content) => {
                    info!(
                        request_id = %request.id,
                        provider = %role,
                        outcome = "success",
                        elapsed_ms = elapsed.as_millis() as u64,
                        "provider attempt succeeded"
                    );
                    info!(
                        request_id = %request.id,
                        provider = %role,
                        "request completed"
                    );

                    return Ok(GatewayResponse::from_result(
                        request.id.clone(),
                        ProviderResult {
                            provider: role,
                            content,
                            elapsed,
                        },
                    ));
                }
                Err(failure) => {
                    let classification = self.classifier.classify(&failure);
                    warn!(
                        request_id = %request.id,
                        provider = %role,
                        outcome = %classification.kind,
                        elapsed_ms = elapsed.as_millis() as u64,
                        error = %failure,
                        "provider attempt failed"
                    );

                    if !classification.fallback_eligible {
                        error!(
                            request_id = %request.id,
                            provider = %role,
                            kind = %classification.kind,
                            "request failed terminally"
                        );
                        return Err(GatewayError::upstream(
                            request.id.clone(),
                            role,
                            classification.kind,
                            failure.to_string(),
                        ));
                    }

                    last_failure = Some((role, classification.kind, failure.to_string()));

                    if remaining > 0 {
                        info!(
                            request_id = %request.id,
                            provider = %role,
                            "falling back to next provider"
                        );
                    }
                }
            }
        }

        // Every provider was tried and failed.
        let (provider, kind, detail) = last_failure
            .map_or_else(
                || (None, None, "no attempts were made".to_string()),
                |(provider, kind, detail)| {
                    (Some(provider), Some(kind), format!("{provider}: {detail}"))
                },
            );

        error!(
            request_id = %request.id,
            last_provider = ?provider,
            last_kind = ?kind,
            "all providers exhausted"
        );

        Err(GatewayError::exhausted(
            request.id.clone(),
            detail,
            provider.zip(kind),
        ))
    }
}

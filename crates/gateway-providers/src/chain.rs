//! Fallback chain construction from configuration.

use crate::gemini::{GeminiConfig, GeminiProvider};
use crate::groq::{GroqConfig, GroqProvider};
use gateway_config::GatewayConfig;
use gateway_core::{CompletionProvider, ProviderFailure};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Failure while constructing a provider adapter at startup.
#[derive(Debug, Error)]
#[error("failed to initialize {provider} provider: {source}")]
pub struct ProviderInitError {
    /// Which provider could not be constructed.
    pub provider: &'static str,
    /// The underlying adapter failure.
    #[source]
    pub source: ProviderFailure,
}

/// Build the ordered fallback chain from configuration.
///
/// Adapters without a credential are excluded here, at load time, and are
/// never attempted at request time. The returned order is the fixed attempt
/// priority: primary (Groq) first, then secondary (Gemini). An empty chain
/// is valid; the dispatcher answers `503` for every request until a
/// credential is configured.
///
/// # Errors
/// Returns an error only when an adapter with a credential cannot be
/// constructed (an HTTP client build failure).
pub fn build_chain(
    config: &GatewayConfig,
) -> Result<Vec<Arc<dyn CompletionProvider>>, ProviderInitError> {
    let mut chain: Vec<Arc<dyn CompletionProvider>> = Vec::new();

    if let Some(api_key) = &config.groq_api_key {
        let provider =
            GroqProvider::new(GroqConfig::new(api_key.clone())).map_err(|source| {
                ProviderInitError {
                    provider: "primary",
                    source,
                }
            })?;
        chain.push(Arc::new(provider));
        info!(provider = "primary", "provider registered");
    } else {
        warn!(provider = "primary", "provider unavailable: no credential");
    }

    if let Some(api_key) = &config.gemini_api_key {
        let provider =
            GeminiProvider::new(GeminiConfig::new(api_key.clone())).map_err(|source| {
                ProviderInitError {
                    provider: "secondary",
                    source,
                }
            })?;
        chain.push(Arc::new(provider));
        info!(provider = "secondary", "provider registered");
    } else {
        warn!(provider = "secondary", "provider unavailable: no credential");
    }

    Ok(chain)
}

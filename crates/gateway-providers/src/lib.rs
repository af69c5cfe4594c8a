//! # Gateway Providers
//!
//! Upstream provider adapters for the chat failover gateway:
//! - Groq (OpenAI-compatible chat completions), the primary provider
//! - Google Gemini (`generateContent`), the secondary provider
//!
//! Adapters normalize every failure mode to
//! [`gateway_core::ProviderFailure`]; nothing else escapes them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod chain;
pub mod gemini;
pub mod groq;

pub use chain::{build_chain, ProviderInitError};
pub use gemini::{GeminiConfig, GeminiProvider};
pub use groq::{GroqConfig, GroqProvider};

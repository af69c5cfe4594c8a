//! # Gateway Core
//!
//! Core types, traits, and error handling for the chat failover gateway.
//!
//! This crate provides the foundational types used throughout the gateway:
//! - Request and response types
//! - The completion provider trait and its failure type
//! - The terminal error taxonomy

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod provider;
pub mod request;
pub mod response;
pub mod types;

// Re-export commonly used types
pub use error::{FailureKind, GatewayError, GatewayResult};
pub use provider::{CompletionProvider, ProviderFailure};
pub use request::ChatRequest;
pub use response::{GatewayResponse, ProviderResult};
pub use types::{ProviderRole, RequestId};

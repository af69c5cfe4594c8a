//! Integration tests for the chat failover gateway.
//!
//! These tests run the real router over real provider adapters pointed at
//! wiremock upstreams, covering:
//! - the `/chat` and `/health` endpoints end to end
//! - primary-to-secondary failover across upstream failure modes
//! - the SDK retry controller against a live gateway

pub mod helpers;

pub use helpers::*;

#[cfg(test)]
mod e2e_tests;
#[cfg(test)]
mod failover_tests;
#[cfg(test)]
mod sdk_tests;

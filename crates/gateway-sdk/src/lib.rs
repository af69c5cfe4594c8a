//! # Gateway SDK
//!
//! Client for the chat failover gateway.
//!
//! The client owns the caller-side retry budget: each [`Client::invoke`]
//! wraps the whole gateway call with a per-attempt timeout and bounded
//! exponential backoff for transient failures. Retry state lives inside
//! the call, so concurrent independent invocations never share counters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};

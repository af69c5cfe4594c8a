//! # Gateway Resilience
//!
//! Resilience primitives for the chat failover gateway:
//! - [`TimeoutRacer`]: bounds one provider attempt by a wall-clock deadline
//! - [`ErrorClassifier`]: maps raw attempt failures to the user-safe
//!   taxonomy and the fallback decision

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod timeout;

pub use classify::{Classification, ErrorClassifier};
pub use timeout::{AttemptFailure, TimeoutRacer};

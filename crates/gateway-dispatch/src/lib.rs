//! # Gateway Dispatch
//!
//! Orchestrates the ordered attempt sequence for one completion request:
//! validate, race each configured provider against the per-attempt
//! deadline in fixed priority order, classify failures, and produce
//! exactly one terminal outcome.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod dispatcher;

pub use dispatcher::{DispatcherConfig, RequestDispatcher};

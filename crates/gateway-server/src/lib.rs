//! # Gateway Server
//!
//! HTTP server for the chat failover gateway:
//! - Axum-based routes for `POST /chat` and `GET /health`
//! - Terminal error mapping onto the wire contract
//! - Graceful shutdown handling

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;

// Re-export main types
pub use error::ApiError;
pub use routes::create_router;
pub use server::{Server, ServerConfig};
pub use state::AppState;

//! HTTP server lifecycle.

use crate::routes::create_router;
use crate::state::AppState;
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Host address to bind.
    pub host: String,
    /// Port to bind.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
        }
    }
}

impl ServerConfig {
    /// Create a configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the host address.
    #[must_use]
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }
}

/// Server runtime error.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Binding or serving failed.
    #[error("server io error: {0}")]
    Io(#[from] std::io::Error),
    /// The configured address could not be parsed.
    #[error("invalid listen address {address}")]
    Address {
        /// The unparseable address string.
        address: String,
    },
}

/// The gateway HTTP server.
pub struct Server {
    config: ServerConfig,
    state: AppState,
}

impl Server {
    /// Create a server over prepared application state.
    #[must_use]
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self { config, state }
    }

    /// Bind and serve until interrupted.
    ///
    /// # Errors
    /// Returns an error if the address is invalid or the listener fails.
    pub async fn run(self) -> Result<(), ServerError> {
        let address: SocketAddr = format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .map_err(|_| ServerError::Address {
                address: format!("{}:{}", self.config.host, self.config.port),
            })?;

        let listener = TcpListener::bind(address).await?;
        info!(address = %address, "server listening");

        let router = create_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        info!("server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    // Serve until SIGINT; a failed signal hook would otherwise shut the
    // server down immediately, so fall back to pending instead.
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
}

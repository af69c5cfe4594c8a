//! # Chat Failover Gateway
//!
//! HTTP gateway that brokers chat completions across a fixed chain of
//! upstream providers, failing over from the primary to the secondary
//! when an attempt times out, cannot connect, or comes back unusable.
//!
//! ## Usage
//!
//! ```bash
//! # Primary only
//! GROQ_API_KEY=... chat-failover-gateway
//!
//! # Primary plus fallback on a custom port
//! GROQ_API_KEY=... GEMINI_KEY=... PORT=8080 chat-failover-gateway
//! ```

use anyhow::Context;
use gateway_config::GatewayConfig;
use gateway_dispatch::{DispatcherConfig, RequestDispatcher};
use gateway_providers::build_chain;
use gateway_server::{AppState, Server, ServerConfig};
use gateway_telemetry::{init_logging, LoggingConfig};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging(&LoggingConfig::new().with_level("info")) {
        eprintln!("failed to initialize logging: {e}");
    }

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "starting chat failover gateway"
    );

    if let Err(e) = run().await {
        error!(error = %e, "gateway failed");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let config = GatewayConfig::from_env().context("loading configuration")?;

    info!(
        port = config.port,
        attempt_deadline_secs = config.attempt_deadline.as_secs(),
        request_timeout_secs = config.request_timeout.as_secs(),
        "configuration loaded"
    );

    if !config.has_any_credential() {
        // Still serve /health; every /chat will answer 503.
        warn!("no provider credentials configured, all chat requests will fail");
    }

    let providers = build_chain(&config).context("building provider chain")?;
    info!(providers = providers.len(), "provider chain ready");

    let dispatcher = RequestDispatcher::new(
        providers,
        DispatcherConfig {
            attempt_deadline: config.attempt_deadline,
            request_timeout: config.request_timeout,
        },
    );

    let state = AppState::new(dispatcher);
    let server_config = ServerConfig::new().with_port(config.port);

    Server::new(server_config, state)
        .run()
        .await
        .context("running server")?;

    Ok(())
}

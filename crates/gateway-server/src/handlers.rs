//! HTTP request handlers for the gateway API.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use gateway_core::{ChatRequest, GatewayError, GatewayResponse, RequestId};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Body of a `POST /chat` request.
#[derive(Debug, Deserialize)]
pub struct ChatBody {
    /// The message text to complete. Absence is treated the same as an
    /// empty message so the rejection carries a correlation id.
    #[serde(default)]
    pub message: String,
}

/// Chat completion endpoint.
///
/// The correlation id is minted before the body is parsed, so even a
/// structurally invalid body is rejected with the documented error shape
/// and stays traceable end to end.
pub async fn chat(
    State(state): State<AppState>,
    body: Result<Json<ChatBody>, JsonRejection>,
) -> Result<Json<GatewayResponse>, ApiError> {
    let request_id = RequestId::generate();

    let Json(body) = body.map_err(|rejection| {
        GatewayError::validation(
            request_id.clone(),
            format!("invalid request body: {}", rejection.body_text()),
        )
    })?;

    let request = ChatRequest::with_id(request_id, body.message);

    debug!(request_id = %request.id, "processing chat request");

    let response = state.dispatcher.dispatch(&request).await?;
    Ok(Json(response))
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Current server time.
    pub timestamp: DateTime<Utc>,
    /// Seconds since the process started.
    pub uptime: u64,
}

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
        uptime: state.uptime_seconds(),
    })
}

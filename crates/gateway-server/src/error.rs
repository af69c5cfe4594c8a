//! Mapping of terminal gateway errors onto the wire contract.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gateway_core::GatewayError;
use serde_json::json;
use tracing::error;

/// HTTP-facing wrapper around a terminal [`GatewayError`].
///
/// `400` — caller fault, `503` — upstream fault (no provider produced a
/// completion), `500` — reserved for genuine gateway bugs, where the
/// client sees only the correlation id while the full detail stays in the
/// server log.
#[derive(Debug)]
pub struct ApiError(pub GatewayError);

impl From<GatewayError> for ApiError {
    fn from(error: GatewayError) -> Self {
        Self(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0;
        let request_id = error.request_id().clone();
        let timestamp = error.timestamp();

        let (status, body) = match &error {
            GatewayError::Validation { message, .. } => (
                StatusCode::BAD_REQUEST,
                json!({
                    "error": message,
                    "requestId": request_id,
                }),
            ),
            GatewayError::Upstream { .. } | GatewayError::Exhausted { .. } => (
                StatusCode::SERVICE_UNAVAILABLE,
                json!({
                    "error": "all providers are currently unavailable, please try again later",
                    "requestId": request_id,
                    "timestamp": timestamp,
                }),
            ),
            GatewayError::Internal { message, .. } => {
                error!(request_id = %request_id, detail = %message, "internal fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal server error",
                        "requestId": request_id,
                        "provider": error.provider(),
                        "timestamp": timestamp,
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

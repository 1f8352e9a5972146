use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::SessionId;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

pub fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse().map_err(|_| {
        tracing::warn!(session_id = %raw, "Malformed session id");
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid session ID: {}", raw),
        )
    })
}

pub fn session_not_found(id: SessionId) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("Session not found: {}", id))
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::presentation::state::AppState;

use super::error_response::{error_response, parse_session_id, session_not_found};
use super::views::SessionView;

#[derive(Serialize)]
pub struct CreateSessionResponse {
    pub session_id: String,
}

#[tracing::instrument(skip(state))]
pub async fn create_session_handler<F, L>(State(state): State<AppState<F, L>>) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    match state.session_service.create().await {
        Ok(session) => (
            StatusCode::CREATED,
            Json(CreateSessionResponse {
                session_id: session.id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to create session");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to create session: {}", e),
            )
        }
    }
}

#[tracing::instrument(skip(state))]
pub async fn get_session_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Path(session_id): Path<String>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.session_service.get(session_id).await {
        Ok(Some(session)) => (StatusCode::OK, Json(SessionView::from(&session))).into_response(),
        Ok(None) => session_not_found(session_id),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load session");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to load session: {}", e),
            )
        }
    }
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::application::ports::{FileLoader, LlmClient, RepositoryError};
use crate::application::services::ConversationError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::state::AppState;

use super::error_response::{error_response, parse_session_id, session_not_found};
use super::views::{AskRequest, MessageView, MessagesResponse};

fn conversation_error_response(error: ConversationError) -> Response {
    match error {
        ConversationError::EmptyQuestion => {
            error_response(StatusCode::BAD_REQUEST, "No question provided")
        }
        ConversationError::SessionNotFound(id) => session_not_found(id),
        ConversationError::Generation(e) => error_response(
            StatusCode::BAD_GATEWAY,
            format!("An error occurred: {}", e),
        ),
        ConversationError::Repository(RepositoryError::NotFound(what)) => {
            error_response(StatusCode::NOT_FOUND, format!("Not found: {}", what))
        }
        ConversationError::Repository(e) => {
            tracing::error!(error = %e, "Conversation storage failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

#[tracing::instrument(skip(state, request))]
pub async fn post_message_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Path(session_id): Path<String>,
    Json(request): Json<AskRequest>,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(question = %sanitize_prompt(&request.content), "Processing question");

    match state
        .conversation_service
        .ask(session_id, &request.content)
        .await
    {
        Ok(answer) => (StatusCode::OK, Json(MessageView::from(&answer))).into_response(),
        Err(e) => conversation_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn list_messages_handler<F, L>(
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

    match state.conversation_service.history(session_id).await {
        Ok(messages) => (
            StatusCode::OK,
            Json(MessagesResponse {
                messages: messages.iter().map(MessageView::from).collect(),
            }),
        )
            .into_response(),
        Err(e) => conversation_error_response(e),
    }
}

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient, RepositoryError};
use crate::application::services::DocumentError;
use crate::domain::is_pdf_upload;
use crate::presentation::state::AppState;

use super::error_response::{error_response, parse_session_id, session_not_found};
use super::views::DocumentSummary;

pub const UPLOAD_SUCCESS_MESSAGE: &str = "PDF processed successfully!";
pub const UPLOAD_NO_TEXT_MESSAGE: &str = "PDF processed, but no text could be extracted.";

#[derive(Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    #[serde(flatten)]
    pub document: DocumentSummary,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_document_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let session_id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read multipart: {}", e),
            );
        }
    };

    let filename = field.file_name().unwrap_or("upload.pdf").to_string();
    let content_type = field.content_type().map(str::to_string);

    tracing::debug!(filename = %filename, content_type = ?content_type, "Processing file upload");

    if !is_pdf_upload(content_type.as_deref(), &filename) {
        tracing::warn!(content_type = ?content_type, "Rejected non-PDF upload");
        return error_response(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            format!(
                "Unsupported content type: {}. Only PDF files are accepted",
                content_type.as_deref().unwrap_or("unknown")
            ),
        );
    }

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(
                StatusCode::BAD_REQUEST,
                format!("Failed to read file: {}", e),
            );
        }
    };

    match state
        .document_service
        .upload(session_id, filename, &data)
        .await
    {
        Ok(document) => {
            let message = if document.text.is_empty() {
                UPLOAD_NO_TEXT_MESSAGE
            } else {
                UPLOAD_SUCCESS_MESSAGE
            };
            (
                StatusCode::OK,
                Json(UploadResponse {
                    message,
                    document: DocumentSummary::from(&document),
                }),
            )
                .into_response()
        }
        Err(DocumentError::Extraction(e)) => error_response(
            StatusCode::UNPROCESSABLE_ENTITY,
            format!("Error reading PDF: {}", e),
        ),
        Err(DocumentError::SessionNotFound(_))
        | Err(DocumentError::Repository(RepositoryError::NotFound(_))) => {
            session_not_found(session_id)
        }
        Err(e) => {
            tracing::error!(error = %e, "Document upload failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

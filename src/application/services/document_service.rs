use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, RepositoryError, SessionRepository};
use crate::domain::{Document, SessionId};

pub struct DocumentService<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    sessions: Arc<dyn SessionRepository>,
}

impl<F> DocumentService<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            file_loader,
            sessions,
        }
    }

    /// Extracts `data` once and makes the result the session's document.
    ///
    /// A failed extraction leaves the session without a document, whatever was
    /// loaded before.
    #[tracing::instrument(
        skip(self, session_id, data),
        fields(session_id = %session_id, bytes = data.len())
    )]
    pub async fn upload(
        &self,
        session_id: SessionId,
        filename: String,
        data: &[u8],
    ) -> Result<Document, DocumentError> {
        if self.sessions.get_session(session_id).await?.is_none() {
            return Err(DocumentError::SessionNotFound(session_id));
        }

        match self.file_loader.extract_text(data, &filename).await {
            Ok(text) => {
                let document = Document::new(filename, data.len() as u64, text);
                self.sessions
                    .set_document(session_id, Some(document.clone()))
                    .await?;
                tracing::info!(
                    document_id = %document.id,
                    char_count = document.char_count(),
                    "Document stored"
                );
                Ok(document)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Document extraction failed");
                self.sessions.set_document(session_id, None).await?;
                Err(DocumentError::Extraction(e))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Extraction(FileLoaderError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

use async_trait::async_trait;

use crate::domain::{Document, Message, Session, SessionId};

use super::RepositoryError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn create_session(&self, session: &Session) -> Result<(), RepositoryError>;

    async fn get_session(&self, id: SessionId) -> Result<Option<Session>, RepositoryError>;

    /// Replaces the stored document wholesale; `None` clears it.
    async fn set_document(
        &self,
        id: SessionId,
        document: Option<Document>,
    ) -> Result<(), RepositoryError>;

    async fn append_message(&self, id: SessionId, message: &Message)
    -> Result<(), RepositoryError>;

    async fn get_messages(&self, id: SessionId) -> Result<Vec<Message>, RepositoryError>;
}

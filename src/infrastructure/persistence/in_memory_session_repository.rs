use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::application::ports::{RepositoryError, SessionRepository};
use crate::domain::{Document, Message, Session, SessionId};

/// Process-local session store. Sessions live until the process exits.
#[derive(Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, Session>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: SessionId) -> RepositoryError {
    RepositoryError::NotFound(format!("session {id}"))
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    #[instrument(skip(self, session), fields(session_id = %session.id))]
    async fn create_session(&self, session: &Session) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&session.id) {
            return Err(RepositoryError::ConstraintViolation(format!(
                "session {} already exists",
                session.id
            )));
        }
        sessions.insert(session.id, session.clone());
        Ok(())
    }

    async fn get_session(&self, id: SessionId) -> Result<Option<Session>, RepositoryError> {
        Ok(self.sessions.read().await.get(&id).cloned())
    }

    #[instrument(
        skip(self, id, document),
        fields(session_id = %id, cleared = document.is_none())
    )]
    async fn set_document(
        &self,
        id: SessionId,
        document: Option<Document>,
    ) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.document = document;
        Ok(())
    }

    #[instrument(skip(self, id, message), fields(session_id = %id, role = %message.role()))]
    async fn append_message(
        &self,
        id: SessionId,
        message: &Message,
    ) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().await;
        let session = sessions.get_mut(&id).ok_or_else(|| not_found(id))?;
        session.conversation.push(message.clone());
        Ok(())
    }

    async fn get_messages(&self, id: SessionId) -> Result<Vec<Message>, RepositoryError> {
        let sessions = self.sessions.read().await;
        let session = sessions.get(&id).ok_or_else(|| not_found(id))?;
        Ok(session.conversation.messages().to_vec())
    }
}

use std::sync::Arc;

use crate::application::ports::{RepositoryError, SessionRepository};
use crate::domain::{Session, SessionId};

pub struct SessionService {
    sessions: Arc<dyn SessionRepository>,
}

impl SessionService {
    pub fn new(sessions: Arc<dyn SessionRepository>) -> Self {
        Self { sessions }
    }

    #[tracing::instrument(skip(self))]
    pub async fn create(&self) -> Result<Session, RepositoryError> {
        let session = Session::new();
        self.sessions.create_session(&session).await?;
        tracing::info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    pub async fn get(&self, id: SessionId) -> Result<Option<Session>, RepositoryError> {
        self.sessions.get_session(id).await
    }
}

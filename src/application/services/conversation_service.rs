use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::application::ports::{LlmClient, LlmClientError, RepositoryError, SessionRepository};
use crate::domain::{Message, SessionId};

use super::prompt_builder::build_prompt;

pub struct ConversationService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
    sessions: Arc<dyn SessionRepository>,
    exchange_locks: Mutex<HashMap<SessionId, Arc<tokio::sync::Mutex<()>>>>,
}

impl<L> ConversationService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>, sessions: Arc<dyn SessionRepository>) -> Self {
        Self {
            llm_client,
            sessions,
            exchange_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Records `question`, asks the model, and records the reply.
    ///
    /// On a generation failure the user turn stays in history without an answer.
    /// Exchanges within one session run one at a time.
    #[tracing::instrument(
        skip(self, session_id, question),
        fields(session_id = %session_id)
    )]
    pub async fn ask(
        &self,
        session_id: SessionId,
        question: &str,
    ) -> Result<Message, ConversationError> {
        if question.trim().is_empty() {
            return Err(ConversationError::EmptyQuestion);
        }

        if self.sessions.get_session(session_id).await?.is_none() {
            return Err(ConversationError::SessionNotFound(session_id));
        }

        let lock = self.exchange_lock(session_id);
        let _exchange = lock.lock().await;

        let session = self
            .sessions
            .get_session(session_id)
            .await?
            .ok_or(ConversationError::SessionNotFound(session_id))?;

        self.sessions
            .append_message(session_id, &Message::user(question))
            .await?;

        let prompt = build_prompt(question, session.document_text());
        tracing::debug!(
            state = "prompt_built",
            prompt_chars = prompt.chars().count(),
            with_document = session.document.is_some(),
            "Prompt built"
        );

        tracing::debug!(state = "request_sent", "Sending prompt to model");
        match self.llm_client.generate(&prompt).await {
            Ok(reply) => {
                let answer = Message::assistant(reply);
                self.sessions.append_message(session_id, &answer).await?;
                tracing::info!(state = "response_recorded", "Question answered");
                Ok(answer)
            }
            Err(e) => {
                tracing::error!(state = "error_reported", error = %e, "Generation failed");
                Err(ConversationError::Generation(e))
            }
        }
    }

    pub async fn history(&self, session_id: SessionId) -> Result<Vec<Message>, ConversationError> {
        match self.sessions.get_messages(session_id).await {
            Ok(messages) => Ok(messages),
            Err(RepositoryError::NotFound(_)) => {
                Err(ConversationError::SessionNotFound(session_id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Entries are never evicted; each lives as long as its session, which is the process.
    fn exchange_lock(&self, session_id: SessionId) -> Arc<tokio::sync::Mutex<()>> {
        let mut locks = self
            .exchange_locks
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        Arc::clone(locks.entry(session_id).or_default())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConversationError {
    #[error("question must not be empty")]
    EmptyQuestion,
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error(transparent)]
    Generation(LlmClientError),
    #[error("repository: {0}")]
    Repository(#[from] RepositoryError),
}

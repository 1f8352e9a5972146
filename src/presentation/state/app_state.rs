use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::{ConversationService, DocumentService, SessionService};
use crate::presentation::config::Settings;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub session_service: Arc<SessionService>,
    pub document_service: Arc<DocumentService<F>>,
    pub conversation_service: Arc<ConversationService<L>>,
    pub settings: Settings,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            session_service: Arc::clone(&self.session_service),
            document_service: Arc::clone(&self.document_service),
            conversation_service: Arc::clone(&self.conversation_service),
            settings: self.settings.clone(),
        }
    }
}

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use docchat::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, SessionRepository,
};
use docchat::application::services::{ConversationService, DocumentService, SessionService};
use docchat::domain::{Session, SessionId};
use docchat::infrastructure::persistence::InMemorySessionRepository;

pub const TEST_REPLY: &str = "Mock answer";
pub const TEST_FAILURE: &str = "quota exceeded";

/// Records every prompt and answers from a script; `None` entries fail.
#[derive(Default)]
pub struct ScriptedLlmClient {
    script: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedLlmClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_script(script: Vec<Option<&str>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().map(|s| s.map(String::from)).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self::with_script(vec![None])
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl LlmClient for ScriptedLlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmClientError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        match self.script.lock().unwrap().pop_front() {
            Some(Some(reply)) => Ok(reply),
            Some(None) => Err(LlmClientError::ApiRequestFailed(TEST_FAILURE.to_string())),
            None => Ok(TEST_REPLY.to_string()),
        }
    }
}

pub struct FailingFileLoader;

#[async_trait::async_trait]
impl FileLoader for FailingFileLoader {
    async fn extract_text(&self, _data: &[u8], _filename: &str) -> Result<String, FileLoaderError> {
        Err(FileLoaderError::ExtractionFailed(
            "failed to parse PDF: invalid header".to_string(),
        ))
    }
}

pub fn session_repository() -> Arc<InMemorySessionRepository> {
    Arc::new(InMemorySessionRepository::new())
}

pub async fn seeded_session(repository: &Arc<InMemorySessionRepository>) -> SessionId {
    let session = Session::new();
    repository.create_session(&session).await.unwrap();
    session.id
}

pub fn conversation_service(
    llm_client: Arc<ScriptedLlmClient>,
    repository: &Arc<InMemorySessionRepository>,
) -> ConversationService<ScriptedLlmClient> {
    let sessions: Arc<dyn SessionRepository> = repository.clone();
    ConversationService::new(llm_client, sessions)
}

pub fn document_service<F: FileLoader>(
    file_loader: F,
    repository: &Arc<InMemorySessionRepository>,
) -> DocumentService<F> {
    let sessions: Arc<dyn SessionRepository> = repository.clone();
    DocumentService::new(Arc::new(file_loader), sessions)
}

pub fn session_service(repository: &Arc<InMemorySessionRepository>) -> SessionService {
    let sessions: Arc<dyn SessionRepository> = repository.clone();
    SessionService::new(sessions)
}

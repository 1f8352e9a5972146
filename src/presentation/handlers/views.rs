use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Document, Message, MessageRole, Session};

#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub document_id: String,
    pub filename: String,
    pub size_bytes: u64,
    pub char_count: usize,
    pub preview: String,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSummary {
    fn from(document: &Document) -> Self {
        Self {
            document_id: document.id.to_string(),
            filename: document.filename.clone(),
            size_bytes: document.size_bytes,
            char_count: document.char_count(),
            preview: document.preview(),
            uploaded_at: document.uploaded_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageView {
    pub id: String,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            id: message.id().to_string(),
            role: message.role(),
            content: message.content().to_string(),
            created_at: message.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionView {
    pub session_id: String,
    pub created_at: DateTime<Utc>,
    pub document: Option<DocumentSummary>,
    pub messages: Vec<MessageView>,
    pub awaiting_answer: bool,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            session_id: session.id.to_string(),
            created_at: session.created_at,
            document: session.document.as_ref().map(DocumentSummary::from),
            messages: session
                .conversation
                .messages()
                .iter()
                .map(MessageView::from)
                .collect(),
            awaiting_answer: session.conversation.has_unanswered_question(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub content: String,
}

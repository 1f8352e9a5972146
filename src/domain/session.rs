use chrono::{DateTime, Utc};

use super::{Conversation, Document, SessionId};

/// Everything one user accumulates between opening the app and leaving it.
#[derive(Debug, Clone)]
pub struct Session {
    pub id: SessionId,
    pub document: Option<Document>,
    pub conversation: Conversation,
    pub created_at: DateTime<Utc>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            document: None,
            conversation: Conversation::new(),
            created_at: Utc::now(),
        }
    }

    /// Text to embed in prompts, if a document has been loaded.
    pub fn document_text(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.text.as_str())
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

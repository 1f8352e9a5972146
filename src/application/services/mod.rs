mod conversation_service;
mod document_service;
mod prompt_builder;
mod session_service;

pub use conversation_service::{ConversationError, ConversationService};
pub use document_service::{DocumentError, DocumentService};
pub use prompt_builder::{PDF_CONTEXT_CHAR_LIMIT, PDF_CONTEXT_LABEL, build_prompt, truncate_chars};
pub use session_service::SessionService;

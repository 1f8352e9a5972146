mod conversation;
mod document;
mod ids;
mod message;
mod message_role;
mod session;

pub use conversation::Conversation;
pub use document::{Document, PREVIEW_CHAR_LIMIT, is_pdf_upload};
pub use ids::{DocumentId, MessageId, SessionId};
pub use message::Message;
pub use message_role::MessageRole;
pub use session::Session;

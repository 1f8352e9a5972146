mod document;
mod error_response;
mod health;
mod messages;
mod sessions;
pub mod views;

pub use document::{UPLOAD_NO_TEXT_MESSAGE, UPLOAD_SUCCESS_MESSAGE, upload_document_handler};
pub use error_response::ErrorResponse;
pub use health::health_handler;
pub use messages::{list_messages_handler, post_message_handler};
pub use sessions::{create_session_handler, get_session_handler};

use chrono::{DateTime, Utc};

use super::DocumentId;

pub const PREVIEW_CHAR_LIMIT: usize = 500;

const PDF_MIME: &str = "application/pdf";

/// Text extracted from the most recent successful upload.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: DocumentId,
    pub filename: String,
    pub size_bytes: u64,
    pub text: String,
    pub uploaded_at: DateTime<Utc>,
}

impl Document {
    pub fn new(filename: String, size_bytes: u64, text: String) -> Self {
        Self {
            id: DocumentId::new(),
            filename,
            size_bytes,
            text,
            uploaded_at: Utc::now(),
        }
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// First `PREVIEW_CHAR_LIMIT` characters, with an ellipsis when the text is longer.
    pub fn preview(&self) -> String {
        match self.text.char_indices().nth(PREVIEW_CHAR_LIMIT) {
            Some((cut, _)) => format!("{}...", &self.text[..cut]),
            None => self.text.clone(),
        }
    }
}

/// Uploads are PDF-only. Clients that send a generic content type are judged by extension.
pub fn is_pdf_upload(content_type: Option<&str>, filename: &str) -> bool {
    match content_type {
        Some(PDF_MIME) => true,
        Some("application/octet-stream") | None => {
            filename.to_ascii_lowercase().ends_with(".pdf")
        }
        Some(_) => false,
    }
}

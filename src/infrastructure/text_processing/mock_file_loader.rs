use crate::application::ports::{FileLoader, FileLoaderError};

/// Treats the upload as UTF-8 text with a single page.
pub struct MockFileLoader;

#[async_trait::async_trait]
impl FileLoader for MockFileLoader {
    async fn extract_text(&self, data: &[u8], _filename: &str) -> Result<String, FileLoaderError> {
        std::str::from_utf8(data)
            .map(|text| format!("{text}\n"))
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}

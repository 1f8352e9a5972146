use std::io::Write;
use std::path::Path;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};

/// Page-by-page PDF text extraction backed by `pdf_oxide`.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, FileLoaderError> {
        let doc = PdfDocument::open(path)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

/// Concatenates page texts in order, each followed by a newline.
///
/// Pages without text still contribute their newline, so `n` pages always
/// produce `n` separators.
pub fn join_page_texts<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    pages.into_iter().fold(String::new(), |mut text, page| {
        text.push_str(page.as_ref());
        text.push('\n');
        text
    })
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data, filename),
        fields(filename = %filename, bytes = data.len())
    )]
    async fn extract_text(&self, data: &[u8], filename: &str) -> Result<String, FileLoaderError> {
        let mut temp_file = tempfile::NamedTempFile::new()?;
        temp_file.write_all(data)?;
        temp_file.flush()?;

        let pages = tokio::task::spawn_blocking(move || {
            let pages = Self::extract_pages(temp_file.path());
            drop(temp_file);
            pages
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(join_page_texts(pages))
    }
}

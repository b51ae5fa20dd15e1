use std::io::Write;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, UploadCandidate};

use super::DEFAULT_EXTRACTION_TIMEOUT;
use super::blocking::run_parser;

pub struct PdfAdapter {
    timeout: Duration,
}

impl Default for PdfAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn extract_pages(path: &Path) -> Result<Vec<String>, TextExtractorError> {
        let mut doc = PdfDocument::open(path).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to parse PDF: {e}"))
        })?;

        let page_count = doc.page_count().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);
        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                TextExtractorError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

#[async_trait]
impl TextExtractor for PdfAdapter {
    #[tracing::instrument(
        skip(self, data, candidate),
        fields(filename = %candidate.name, bytes = data.len())
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        candidate: &UploadCandidate,
    ) -> Result<String, TextExtractorError> {
        if candidate.content_type() != Some(ContentType::Pdf) {
            return Err(TextExtractorError::UnsupportedContentType(
                candidate.mime_type.clone(),
            ));
        }

        // The parser only opens files, so the upload is spilled to a temp file
        // that lives until extraction finishes.
        let mut temp_file = tempfile::NamedTempFile::new().map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to create temp file: {e}"))
        })?;
        temp_file.write_all(data).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to write temp file: {e}"))
        })?;

        let text = run_parser(self.timeout, move || {
            let pages = Self::extract_pages(temp_file.path())?;
            tracing::info!(page_count = pages.len(), "PDF text extraction complete");
            Ok(pages.join("\n\n"))
        })
        .await?;

        if text.trim().is_empty() {
            tracing::warn!(filename = %candidate.name, "PDF parsed but contains no text");
        }
        Ok(text)
    }
}

use async_trait::async_trait;

use crate::domain::UploadCandidate;

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        candidate: &UploadCandidate,
    ) -> Result<String, TextExtractorError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TextExtractorError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out after {0}s")]
    TimedOut(u64),
}

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, UploadCandidate};

/// Routes each candidate to the adapter registered for its MIME type.
pub struct CompositeTextExtractor {
    adapters: HashMap<ContentType, Arc<dyn TextExtractor>>,
}

impl CompositeTextExtractor {
    pub fn new(adapters: Vec<(ContentType, Arc<dyn TextExtractor>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    pub fn supports(&self, content_type: ContentType) -> bool {
        self.adapters.contains_key(&content_type)
    }
}

#[async_trait]
impl TextExtractor for CompositeTextExtractor {
    async fn extract_text(
        &self,
        data: &[u8],
        candidate: &UploadCandidate,
    ) -> Result<String, TextExtractorError> {
        let adapter = candidate
            .content_type()
            .and_then(|ct| self.adapters.get(&ct))
            .ok_or_else(|| {
                TextExtractorError::UnsupportedContentType(candidate.mime_type.clone())
            })?;

        adapter.extract_text(data, candidate).await
    }
}

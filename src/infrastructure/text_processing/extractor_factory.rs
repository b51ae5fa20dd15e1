use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TextExtractor;
use crate::domain::ContentType;
use crate::presentation::config::IntakeSettings;

use super::composite_text_extractor::CompositeTextExtractor;
use super::docx_adapter::DocxAdapter;
use super::pdf_adapter::PdfAdapter;

#[derive(Debug, thiserror::Error)]
pub enum ExtractorFactoryError {
    #[error("extraction_timeout_secs must be greater than zero")]
    ZeroTimeout,
}

pub struct ExtractorFactory;

impl ExtractorFactory {
    pub fn create(
        settings: &IntakeSettings,
    ) -> Result<Arc<dyn TextExtractor>, ExtractorFactoryError> {
        if settings.extraction_timeout_secs == 0 {
            return Err(ExtractorFactoryError::ZeroTimeout);
        }
        let timeout = Duration::from_secs(settings.extraction_timeout_secs);

        let pdf: Arc<dyn TextExtractor> = Arc::new(PdfAdapter::with_timeout(timeout));
        let docx: Arc<dyn TextExtractor> = Arc::new(DocxAdapter::with_timeout(timeout));

        tracing::info!(timeout_secs = timeout.as_secs(), "Loading PDF and DOCX extractors");
        Ok(Arc::new(CompositeTextExtractor::new(vec![
            (ContentType::Pdf, pdf),
            (ContentType::Docx, docx),
        ])))
    }
}

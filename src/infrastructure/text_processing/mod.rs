use std::time::Duration;

mod blocking;
mod composite_text_extractor;
mod docx_adapter;
mod extractor_factory;
mod pdf_adapter;

pub use composite_text_extractor::CompositeTextExtractor;
pub use docx_adapter::{DocxAdapter, document_xml_to_text};
pub use extractor_factory::{ExtractorFactory, ExtractorFactoryError};
pub use pdf_adapter::PdfAdapter;

pub const DEFAULT_EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

use std::io::{Cursor, Read};
use std::time::Duration;

use async_trait::async_trait;
use quick_xml::events::Event;
use quick_xml::reader::Reader;
use zip::ZipArchive;

use crate::application::ports::{TextExtractor, TextExtractorError};
use crate::domain::{ContentType, UploadCandidate};

use super::DEFAULT_EXTRACTION_TIMEOUT;
use super::blocking::run_parser;

const DOCUMENT_PART: &str = "word/document.xml";

/// Raw text extraction for Office Open XML word-processing documents.
///
/// Output follows the usual raw-text convention: runs are concatenated,
/// tabs inside runs become `\t` and every paragraph is closed with a blank
/// line. Line and carriage breaks produce nothing. No formatting or
/// numbering is rendered.
pub struct DocxAdapter {
    timeout: Duration,
}

impl Default for DocxAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxAdapter {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_EXTRACTION_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    fn read_document_part(data: &[u8]) -> Result<String, TextExtractorError> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to open DOCX package: {e}"))
        })?;

        let mut part = archive.by_name(DOCUMENT_PART).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("missing {DOCUMENT_PART}: {e}"))
        })?;

        let mut xml = String::new();
        part.read_to_string(&mut xml).map_err(|e| {
            TextExtractorError::ExtractionFailed(format!("failed to read {DOCUMENT_PART}: {e}"))
        })?;

        Ok(xml)
    }
}

/// Walks `word/document.xml` and produces plain text.
pub fn document_xml_to_text(xml: &str) -> Result<String, TextExtractorError> {
    let mut reader = Reader::from_str(xml);
    let mut out = String::new();
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.local_name().as_ref() {
                b"r" => in_run = true,
                b"t" if in_run => in_text = true,
                _ => {}
            },
            Ok(Event::Empty(e)) => match e.local_name().as_ref() {
                b"tab" if in_run => out.push('\t'),
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"r" => in_run = false,
                b"t" => in_text = false,
                b"p" => out.push_str("\n\n"),
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t.unescape().map_err(|e| {
                    TextExtractorError::ExtractionFailed(format!("bad text run: {e}"))
                })?;
                out.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(TextExtractorError::ExtractionFailed(format!(
                    "malformed {DOCUMENT_PART} at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
            _ => {}
        }
    }

    Ok(out)
}

#[async_trait]
impl TextExtractor for DocxAdapter {
    #[tracing::instrument(
        skip(self, data, candidate),
        fields(filename = %candidate.name, bytes = data.len())
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        candidate: &UploadCandidate,
    ) -> Result<String, TextExtractorError> {
        if candidate.content_type() != Some(ContentType::Docx) {
            return Err(TextExtractorError::UnsupportedContentType(
                candidate.mime_type.clone(),
            ));
        }

        let data = data.to_vec();
        let text = run_parser(self.timeout, move || {
            let xml = Self::read_document_part(&data)?;
            document_xml_to_text(&xml)
        })
        .await?;

        if text.trim().is_empty() {
            tracing::warn!(filename = %candidate.name, "DOCX parsed but contains no text");
        }

        tracing::info!(chars = text.chars().count(), "DOCX text extraction complete");
        Ok(text)
    }
}

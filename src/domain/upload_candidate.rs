use bytes::Bytes;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// A file the user dropped on the widget or picked from the file dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadCandidate {
    pub name: String,
    pub byte_size: u64,
    pub mime_type: String,
    pub raw_bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    Pdf,
    Docx,
}

impl ContentType {
    pub const ALL: [ContentType; 2] = [ContentType::Pdf, ContentType::Docx];

    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            _ => None,
        }
    }

    pub fn as_mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => ".pdf",
            Self::Docx => ".docx",
        }
    }

    /// Value for the file picker's `accept` attribute.
    pub fn picker_accept() -> String {
        Self::ALL
            .iter()
            .map(|ct| ct.extension())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl UploadCandidate {
    pub fn new(name: String, mime_type: String, raw_bytes: Bytes) -> Self {
        Self {
            name,
            byte_size: raw_bytes.len() as u64,
            mime_type,
            raw_bytes,
        }
    }

    pub fn content_type(&self) -> Option<ContentType> {
        ContentType::from_mime(&self.mime_type)
    }

    /// Human-readable size, e.g. `"12.34 KB"`.
    pub fn size_label(&self) -> String {
        format!("{:.2} KB", self.byte_size as f64 / 1024.0)
    }
}

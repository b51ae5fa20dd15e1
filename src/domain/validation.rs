use std::fmt;

use super::upload_candidate::{ContentType, UploadCandidate};

/// 10 MiB. Files strictly larger than this are rejected.
pub const MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

const MIB: u64 = 1024 * 1024;
const KIB: u64 = 1024;

/// Renders an upload limit the way the picker help text shows it:
/// `10MB`, `512KB`, or `300 bytes` when neither unit divides it.
pub fn size_limit_label(max_bytes: u64) -> String {
    if max_bytes >= MIB && max_bytes % MIB == 0 {
        format!("{}MB", max_bytes / MIB)
    } else if max_bytes >= KIB && max_bytes % KIB == 0 {
        format!("{}KB", max_bytes / KIB)
    } else {
        format!("{max_bytes} bytes")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    UnsupportedType,
    TooLarge { max_bytes: u64 },
}

impl ValidationError {
    pub fn message(&self) -> String {
        match self {
            Self::UnsupportedType => "Please upload a PDF or DOCX file".to_string(),
            Self::TooLarge { max_bytes } => {
                format!("File size must be less than {}", size_limit_label(*max_bytes))
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted(ContentType),
    Rejected(ValidationError),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(err) => Some(err.message()),
        }
    }
}

/// Checks type first, then size.
pub fn validate_candidate(candidate: &UploadCandidate, max_bytes: u64) -> ValidationOutcome {
    let Some(content_type) = candidate.content_type() else {
        return ValidationOutcome::Rejected(ValidationError::UnsupportedType);
    };

    if candidate.byte_size > max_bytes {
        return ValidationOutcome::Rejected(ValidationError::TooLarge {
            max_bytes,
        });
    }

    ValidationOutcome::Accepted(content_type)
}

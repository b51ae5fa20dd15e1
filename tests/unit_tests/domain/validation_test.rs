use bytes::Bytes;

use resume_intake::domain::{
    ContentType, DOCX_MIME, MAX_UPLOAD_BYTES, PDF_MIME, UploadCandidate, ValidationError,
    ValidationOutcome, size_limit_label, validate_candidate,
};

fn candidate(mime: &str, byte_size: u64) -> UploadCandidate {
    UploadCandidate {
        name: "resume".to_string(),
        byte_size,
        mime_type: mime.to_string(),
        raw_bytes: Bytes::new(),
    }
}

#[test]
fn given_plain_text_file_when_validating_then_rejects_with_type_message() {
    let outcome = validate_candidate(&candidate("text/plain", 10), MAX_UPLOAD_BYTES);

    assert_eq!(
        outcome,
        ValidationOutcome::Rejected(ValidationError::UnsupportedType)
    );
    assert_eq!(
        outcome.reason().as_deref(),
        Some("Please upload a PDF or DOCX file")
    );
}

#[test]
fn given_pdf_over_limit_when_validating_then_rejects_with_size_message() {
    let outcome = validate_candidate(&candidate(PDF_MIME, MAX_UPLOAD_BYTES + 1), MAX_UPLOAD_BYTES);

    assert_eq!(
        outcome,
        ValidationOutcome::Rejected(ValidationError::TooLarge {
            max_bytes: MAX_UPLOAD_BYTES
        })
    );
    assert_eq!(
        outcome.reason().as_deref(),
        Some("File size must be less than 10MB")
    );
}

#[test]
fn given_docx_over_limit_when_validating_then_rejects_too_large() {
    let outcome = validate_candidate(&candidate(DOCX_MIME, 50 * 1024 * 1024), MAX_UPLOAD_BYTES);

    assert!(matches!(
        outcome,
        ValidationOutcome::Rejected(ValidationError::TooLarge { .. })
    ));
}

#[test]
fn given_pdf_exactly_at_limit_when_validating_then_accepts() {
    let outcome = validate_candidate(&candidate(PDF_MIME, MAX_UPLOAD_BYTES), MAX_UPLOAD_BYTES);

    assert_eq!(outcome, ValidationOutcome::Accepted(ContentType::Pdf));
    assert!(outcome.is_accepted());
    assert_eq!(outcome.reason(), None);
}

#[test]
fn given_oversized_file_of_unsupported_type_when_validating_then_type_is_reported_first() {
    let outcome = validate_candidate(&candidate("image/png", MAX_UPLOAD_BYTES * 2), MAX_UPLOAD_BYTES);

    assert_eq!(
        outcome,
        ValidationOutcome::Rejected(ValidationError::UnsupportedType)
    );
}

#[test]
fn given_limit_constant_then_equals_ten_mebibytes() {
    assert_eq!(MAX_UPLOAD_BYTES, 10_485_760);
}

#[test]
fn given_configured_limit_when_rejecting_then_message_names_that_limit() {
    let limit = 2 * 1024 * 1024;

    let outcome = validate_candidate(&candidate(PDF_MIME, limit + 1), limit);

    assert_eq!(
        outcome.reason().as_deref(),
        Some("File size must be less than 2MB")
    );
}

#[test]
fn given_limits_when_labelling_then_uses_largest_exact_unit() {
    assert_eq!(size_limit_label(MAX_UPLOAD_BYTES), "10MB");
    assert_eq!(size_limit_label(512 * 1024), "512KB");
    assert_eq!(size_limit_label(16), "16 bytes");
}

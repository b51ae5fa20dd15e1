use bytes::Bytes;

use resume_intake::domain::{ContentType, DOCX_MIME, PDF_MIME, UploadCandidate};

#[test]
fn given_pdf_mime_when_parsing_then_returns_pdf_content_type() {
    assert_eq!(ContentType::from_mime(PDF_MIME), Some(ContentType::Pdf));
}

#[test]
fn given_docx_mime_when_parsing_then_returns_docx_content_type() {
    assert_eq!(
        ContentType::from_mime(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        ),
        Some(ContentType::Docx)
    );
}

#[test]
fn given_legacy_word_mime_when_parsing_then_returns_none() {
    assert_eq!(ContentType::from_mime("application/msword"), None);
}

#[test]
fn given_accepted_types_when_building_picker_accept_then_lists_both_extensions() {
    assert_eq!(ContentType::picker_accept(), ".pdf,.docx");
}

#[test]
fn given_payload_when_creating_candidate_then_size_comes_from_bytes() {
    let candidate = UploadCandidate::new(
        "resume.docx".to_string(),
        DOCX_MIME.to_string(),
        Bytes::from_static(b"12345"),
    );

    assert_eq!(candidate.byte_size, 5);
    assert_eq!(candidate.content_type(), Some(ContentType::Docx));
}

#[test]
fn given_2048_bytes_when_formatting_size_then_shows_two_decimal_kilobytes() {
    let candidate = UploadCandidate::new(
        "resume.pdf".to_string(),
        PDF_MIME.to_string(),
        Bytes::from(vec![0u8; 2048]),
    );

    assert_eq!(candidate.size_label(), "2.00 KB");
}

#[test]
fn given_1536_bytes_when_formatting_size_then_rounds_to_hundredths() {
    let candidate = UploadCandidate::new(
        "resume.pdf".to_string(),
        PDF_MIME.to_string(),
        Bytes::from(vec![0u8; 1536]),
    );

    assert_eq!(candidate.size_label(), "1.50 KB");
}

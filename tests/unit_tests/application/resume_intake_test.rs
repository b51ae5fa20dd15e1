use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Notify;

use resume_intake::application::ports::{EphemeralStore, TextExtractor};
use resume_intake::application::services::{IntakeError, ResumeIntake};
use resume_intake::domain::{
    ContentType, DOCX_MIME, IntakeState, MAX_UPLOAD_BYTES, Notification, PDF_MIME, Route,
    SessionId, StorageKey, UploadCandidate, ValidationError, ValidationOutcome,
};
use resume_intake::infrastructure::storage::InMemoryEphemeralStore;

use super::support::{EchoExtractor, FailingExtractor, FailingStore, GatedExtractor, file};

fn intake_with(
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn EphemeralStore>,
) -> (SessionId, ResumeIntake) {
    let session_id = SessionId::new();
    let intake = ResumeIntake::new(session_id, extractor, store, MAX_UPLOAD_BYTES);
    (session_id, intake)
}

#[tokio::test]
async fn given_unsupported_mime_when_selecting_then_rejects_without_extracting() {
    let extractor = Arc::new(EchoExtractor::default());
    let (_, intake) = intake_with(extractor.clone(), Arc::new(InMemoryEphemeralStore::new()));

    let outcome = intake
        .select(file("resume.txt", "text/plain", b"plain text"))
        .await
        .unwrap();

    assert_eq!(
        outcome,
        ValidationOutcome::Rejected(ValidationError::UnsupportedType)
    );
    assert_eq!(extractor.calls(), 0);
    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Empty);
    assert_eq!(snapshot.error, Some(ValidationError::UnsupportedType));
    assert_eq!(snapshot.file_name, None);
}

#[tokio::test]
async fn given_oversized_docx_when_selecting_then_rejects_without_extracting() {
    let extractor = Arc::new(EchoExtractor::default());
    let (_, intake) = intake_with(extractor.clone(), Arc::new(InMemoryEphemeralStore::new()));
    let oversized = UploadCandidate {
        name: "huge.docx".to_string(),
        byte_size: MAX_UPLOAD_BYTES + 1,
        mime_type: DOCX_MIME.to_string(),
        raw_bytes: Bytes::new(),
    };

    let outcome = intake.select(oversized).await.unwrap();

    let too_large = ValidationError::TooLarge {
        max_bytes: MAX_UPLOAD_BYTES,
    };
    assert_eq!(outcome, ValidationOutcome::Rejected(too_large));
    assert_eq!(extractor.calls(), 0);
    assert_eq!(intake.snapshot().await.error, Some(too_large));
}

#[tokio::test]
async fn given_valid_pdf_when_selecting_then_text_equals_extractor_output() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );

    let outcome = intake
        .select(file("resume.pdf", PDF_MIME, b"Jane Doe, Rust engineer"))
        .await
        .unwrap();

    assert_eq!(outcome, ValidationOutcome::Accepted(ContentType::Pdf));
    assert_eq!(intake.extracted_text().await, "Jane Doe, Rust engineer");
    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Ready);
    assert_eq!(snapshot.file_name.as_deref(), Some("resume.pdf"));
    assert!(snapshot.has_text);
    assert!(!snapshot.is_processing);
    assert_eq!(snapshot.action_label, "Continue");
}

#[tokio::test]
async fn given_valid_docx_when_selecting_then_text_equals_extractor_output() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );

    let outcome = intake
        .select(file("resume.docx", DOCX_MIME, b"Experience\n\nAcme Inc."))
        .await
        .unwrap();

    assert_eq!(outcome, ValidationOutcome::Accepted(ContentType::Docx));
    assert_eq!(intake.extracted_text().await, "Experience\n\nAcme Inc.");
}

#[tokio::test]
async fn given_failing_extractor_when_selecting_then_text_is_empty_and_notification_recorded() {
    let store = Arc::new(InMemoryEphemeralStore::new());
    let (_, intake) = intake_with(Arc::new(FailingExtractor), store.clone());

    intake
        .select(file("broken.pdf", PDF_MIME, b"%PDF-garbage"))
        .await
        .unwrap();

    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Ready);
    assert!(!snapshot.has_text);
    assert_eq!(
        snapshot.notification,
        Some(Notification::extraction_failed())
    );
    assert_eq!(snapshot.action_label, "Processing...");

    let outcome = intake.confirm().await.unwrap();
    assert_eq!(outcome.navigate_to, Route::Analysis);
    assert!(!outcome.stored_text);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_extracted_text_when_confirming_then_writes_resume_text_and_navigates() {
    let store = Arc::new(InMemoryEphemeralStore::new());
    let (session_id, intake) = intake_with(Arc::new(EchoExtractor::default()), store.clone());
    intake
        .select(file("resume.pdf", PDF_MIME, b"Jane Doe"))
        .await
        .unwrap();

    let outcome = intake.confirm().await.unwrap();

    assert_eq!(outcome.navigate_to.as_path(), "/analysis");
    assert!(outcome.stored_text);
    assert_eq!(
        store
            .get(&StorageKey::resume_text(&session_id))
            .await
            .unwrap()
            .as_deref(),
        Some("Jane Doe")
    );
    assert_eq!(intake.snapshot().await.status, IntakeState::Confirmed);
}

#[tokio::test]
async fn given_second_valid_file_when_selecting_then_prior_state_is_replaced_and_store_untouched() {
    let store = Arc::new(InMemoryEphemeralStore::new());
    let (_, intake) = intake_with(Arc::new(EchoExtractor::default()), store.clone());
    intake
        .select(file("first.pdf", PDF_MIME, b"first resume"))
        .await
        .unwrap();

    intake
        .select(file("second.docx", DOCX_MIME, b"second resume"))
        .await
        .unwrap();

    assert_eq!(intake.extracted_text().await, "second resume");
    assert_eq!(
        intake.snapshot().await.file_name.as_deref(),
        Some("second.docx")
    );
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_failure_then_valid_file_when_selecting_then_notification_is_cleared() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    intake
        .select(file("bad.pdf", PDF_MIME, &[0xFF, 0xFE]))
        .await
        .unwrap();
    assert!(intake.snapshot().await.notification.is_some());

    intake
        .select(file("good.pdf", PDF_MIME, b"good"))
        .await
        .unwrap();

    assert_eq!(intake.snapshot().await.notification, None);
}

#[tokio::test]
async fn given_ready_widget_when_selecting_invalid_file_then_widget_empties_with_error() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    intake
        .select(file("resume.pdf", PDF_MIME, b"resume"))
        .await
        .unwrap();

    intake
        .select(file("photo.png", "image/png", b"png"))
        .await
        .unwrap();

    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Empty);
    assert_eq!(snapshot.file_name, None);
    assert!(!snapshot.has_text);
    assert_eq!(snapshot.error, Some(ValidationError::UnsupportedType));
    assert!(matches!(
        intake.confirm().await,
        Err(IntakeError::NoCandidate)
    ));
}

#[tokio::test]
async fn given_recorded_error_when_validating_valid_file_then_error_is_cleared() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    let rejected = intake.validate(&file("a.txt", "text/plain", b"a")).await;
    assert!(!rejected.is_accepted());
    assert!(intake.snapshot().await.error.is_some());

    let accepted = intake.validate(&file("a.pdf", PDF_MIME, b"a")).await;

    assert!(accepted.is_accepted());
    assert_eq!(intake.snapshot().await.error, None);
}

#[tokio::test]
async fn given_no_candidate_when_confirming_then_returns_no_candidate() {
    let store = Arc::new(InMemoryEphemeralStore::new());
    let (_, intake) = intake_with(Arc::new(EchoExtractor::default()), store.clone());

    let result = intake.confirm().await;

    assert!(matches!(result, Err(IntakeError::NoCandidate)));
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_confirmed_widget_when_confirming_or_selecting_again_then_already_confirmed() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    intake
        .select(file("resume.pdf", PDF_MIME, b"resume"))
        .await
        .unwrap();
    intake.confirm().await.unwrap();

    assert!(matches!(
        intake.confirm().await,
        Err(IntakeError::AlreadyConfirmed)
    ));
    assert!(matches!(
        intake.select(file("other.pdf", PDF_MIME, b"other")).await,
        Err(IntakeError::AlreadyConfirmed)
    ));
}

#[tokio::test]
async fn given_failing_store_when_confirming_then_storage_error_and_widget_stays_ready() {
    let (_, intake) = intake_with(Arc::new(EchoExtractor::default()), Arc::new(FailingStore));
    intake
        .select(file("resume.pdf", PDF_MIME, b"resume"))
        .await
        .unwrap();

    let result = intake.confirm().await;

    assert!(matches!(result, Err(IntakeError::Storage(_))));
    assert_eq!(intake.snapshot().await.status, IntakeState::Ready);
}

#[tokio::test]
async fn given_notification_when_dismissing_then_it_is_cleared() {
    let (_, intake) = intake_with(
        Arc::new(FailingExtractor),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    intake
        .select(file("broken.docx", DOCX_MIME, b"not a zip"))
        .await
        .unwrap();

    intake.dismiss_notification().await;

    assert_eq!(intake.snapshot().await.notification, None);
}

#[tokio::test]
async fn given_unsupported_mime_when_extracting_directly_then_returns_empty_without_calling_extractor() {
    let extractor = Arc::new(EchoExtractor::default());
    let (_, intake) = intake_with(extractor.clone(), Arc::new(InMemoryEphemeralStore::new()));

    let text = intake
        .extract_text(&file("notes.rtf", "application/rtf", b"{\\rtf1}"))
        .await;

    assert_eq!(text, "");
    assert_eq!(extractor.calls(), 0);
    assert_eq!(intake.snapshot().await.notification, None);
}

#[tokio::test]
async fn given_failing_extractor_when_extracting_directly_then_returns_empty_and_notifies() {
    let (_, intake) = intake_with(
        Arc::new(FailingExtractor),
        Arc::new(InMemoryEphemeralStore::new()),
    );

    let text = intake.extract_text(&file("broken.pdf", PDF_MIME, b"x")).await;

    assert_eq!(text, "");
    assert_eq!(
        intake.snapshot().await.notification,
        Some(Notification::extraction_failed())
    );
}

#[tokio::test]
async fn given_slow_extraction_superseded_by_new_selection_then_stale_result_is_discarded() {
    let gate = Arc::new(Notify::new());
    let (_, intake) = intake_with(
        Arc::new(GatedExtractor { gate: gate.clone() }),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    let intake = Arc::new(intake);

    let slow = {
        let intake = Arc::clone(&intake);
        tokio::spawn(async move {
            intake
                .select(file("slow.pdf", PDF_MIME, b"stale resume"))
                .await
        })
    };

    for _ in 0..100 {
        if intake.snapshot().await.status == IntakeState::Extracting {
            break;
        }
        tokio::task::yield_now().await;
    }
    let in_flight = intake.snapshot().await;
    assert_eq!(in_flight.status, IntakeState::Extracting);
    assert!(in_flight.is_processing);
    assert!(matches!(
        intake.confirm().await,
        Err(IntakeError::ExtractionInProgress)
    ));

    intake
        .select(file("fast.pdf", PDF_MIME, b"fresh resume"))
        .await
        .unwrap();
    gate.notify_one();
    slow.await.unwrap().unwrap();

    let snapshot = intake.snapshot().await;
    assert_eq!(intake.extracted_text().await, "fresh resume");
    assert_eq!(snapshot.file_name.as_deref(), Some("fast.pdf"));
    assert_eq!(snapshot.status, IntakeState::Ready);
}

#[tokio::test]
async fn given_confirmed_widget_then_upload_bytes_are_released_and_metadata_kept() {
    let (_, intake) = intake_with(
        Arc::new(EchoExtractor::default()),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    intake
        .select(file("resume.pdf", PDF_MIME, b"Jane Doe"))
        .await
        .unwrap();
    assert_eq!(intake.buffered_bytes().await, 8);

    intake.confirm().await.unwrap();

    assert_eq!(intake.buffered_bytes().await, 0);
    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.file_name.as_deref(), Some("resume.pdf"));
    assert_eq!(snapshot.byte_size, Some(8));
}

#[tokio::test]
async fn given_document_without_text_when_selecting_then_ready_without_notification() {
    let store = Arc::new(InMemoryEphemeralStore::new());
    let (_, intake) = intake_with(Arc::new(EchoExtractor::default()), store.clone());

    intake
        .select(file("blank.docx", DOCX_MIME, b""))
        .await
        .unwrap();

    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Ready);
    assert!(!snapshot.has_text);
    assert_eq!(snapshot.notification, None);

    let outcome = intake.confirm().await.unwrap();
    assert!(!outcome.stored_text);
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn given_slow_extraction_when_invalid_file_is_selected_then_widget_stays_empty() {
    let gate = Arc::new(Notify::new());
    let (_, intake) = intake_with(
        Arc::new(GatedExtractor { gate: gate.clone() }),
        Arc::new(InMemoryEphemeralStore::new()),
    );
    let intake = Arc::new(intake);

    let slow = {
        let intake = Arc::clone(&intake);
        tokio::spawn(async move {
            intake
                .select(file("slow.pdf", PDF_MIME, b"stale resume"))
                .await
        })
    };
    for _ in 0..100 {
        if intake.snapshot().await.status == IntakeState::Extracting {
            break;
        }
        tokio::task::yield_now().await;
    }
    assert_eq!(intake.snapshot().await.status, IntakeState::Extracting);

    let rejected = intake
        .select(file("notes.txt", "text/plain", b"notes"))
        .await
        .unwrap();
    gate.notify_one();
    slow.await.unwrap().unwrap();

    assert!(!rejected.is_accepted());
    let snapshot = intake.snapshot().await;
    assert_eq!(snapshot.status, IntakeState::Empty);
    assert_eq!(snapshot.file_name, None);
    assert!(!snapshot.has_text);
    assert_eq!(snapshot.error, Some(ValidationError::UnsupportedType));
    assert_eq!(intake.extracted_text().await, "");
}

use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::Mutex;

use crate::application::ports::{
    EphemeralStore, EphemeralStoreError, TextExtractor, TextExtractorError,
};
use crate::domain::{
    ExtractionTicket, IntakeState, Notification, Route, SessionId, StorageKey, UploadCandidate,
    ValidationError, ValidationOutcome, validate_candidate,
};

use super::text_preview::preview_text;

/// One resume upload widget: holds at most one candidate, extracts its text
/// and stages it for the analysis screen on confirmation.
pub struct ResumeIntake {
    session_id: SessionId,
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn EphemeralStore>,
    max_upload_bytes: u64,
    widget: Mutex<WidgetState>,
}

struct WidgetState {
    status: IntakeState,
    candidate: Option<UploadCandidate>,
    extracted_text: String,
    error: Option<ValidationError>,
    notification: Option<Notification>,
    last_issued: Option<ExtractionTicket>,
    in_flight: Option<ExtractionTicket>,
}

impl WidgetState {
    fn empty() -> Self {
        Self {
            status: IntakeState::Empty,
            candidate: None,
            extracted_text: String::new(),
            error: None,
            notification: None,
            last_issued: None,
            in_flight: None,
        }
    }

    fn issue_ticket(&mut self) -> ExtractionTicket {
        let ticket = self
            .last_issued
            .map_or_else(ExtractionTicket::first, ExtractionTicket::next);
        self.last_issued = Some(ticket);
        self.in_flight = Some(ticket);
        ticket
    }

    fn transition(&mut self, to: IntakeState) {
        tracing::debug!(from = %self.status, to = %to, "Intake state transition");
        self.status = to;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntakeSnapshot {
    pub status: IntakeState,
    pub file_name: Option<String>,
    pub byte_size: Option<u64>,
    pub size_label: Option<String>,
    pub error: Option<ValidationError>,
    pub is_processing: bool,
    pub has_text: bool,
    pub text_preview: Option<String>,
    pub notification: Option<Notification>,
    pub action_label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmOutcome {
    pub navigate_to: Route,
    pub stored_text: bool,
}

impl ResumeIntake {
    pub fn new(
        session_id: SessionId,
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn EphemeralStore>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            session_id,
            extractor,
            store,
            max_upload_bytes,
            widget: Mutex::new(WidgetState::empty()),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    /// Checks type and size, recording the rejection reason or clearing any
    /// previous one.
    pub async fn validate(&self, candidate: &UploadCandidate) -> ValidationOutcome {
        let outcome = validate_candidate(candidate, self.max_upload_bytes);
        let mut widget = self.widget.lock().await;
        widget.error = match outcome {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::Rejected(err) => Some(err),
        };
        outcome
    }

    /// Extracts text from an already validated candidate. Extractor failures
    /// are reported through the widget's notification and yield empty text.
    pub async fn extract_text(&self, candidate: &UploadCandidate) -> String {
        match self.run_extraction(candidate).await {
            Ok(text) => text,
            Err(_) => {
                self.widget.lock().await.notification = Some(Notification::extraction_failed());
                String::new()
            }
        }
    }

    /// Entry point for both drag-and-drop and the file picker.
    ///
    /// A rejected file empties the widget. An accepted one replaces whatever
    /// was held before and is extracted; if another selection lands while the
    /// extraction is running, this result is dropped.
    #[tracing::instrument(
        skip(self, candidate),
        fields(
            session_id = %self.session_id.as_uuid(),
            filename = %candidate.name,
            bytes = candidate.byte_size,
        )
    )]
    pub async fn select(
        &self,
        candidate: UploadCandidate,
    ) -> Result<ValidationOutcome, IntakeError> {
        let outcome = validate_candidate(&candidate, self.max_upload_bytes);

        let ticket = {
            let mut widget = self.widget.lock().await;
            if widget.status == IntakeState::Confirmed {
                return Err(IntakeError::AlreadyConfirmed);
            }

            match outcome {
                ValidationOutcome::Rejected(err) => {
                    tracing::info!(reason = %err, "Upload rejected");
                    let last_issued = widget.last_issued;
                    widget.transition(IntakeState::Empty);
                    *widget = WidgetState {
                        error: Some(err),
                        last_issued,
                        ..WidgetState::empty()
                    };
                    return Ok(outcome);
                }
                ValidationOutcome::Accepted(_) => {
                    let ticket = widget.issue_ticket();
                    widget.candidate = Some(candidate.clone());
                    widget.extracted_text.clear();
                    widget.error = None;
                    widget.notification = None;
                    widget.transition(IntakeState::Validated);
                    widget.transition(IntakeState::Extracting);
                    ticket
                }
            }
        };

        let result = self.run_extraction(&candidate).await;

        let mut widget = self.widget.lock().await;
        if widget.in_flight != Some(ticket) {
            tracing::debug!(
                ticket = ticket.as_u64(),
                "Discarding extraction result for superseded selection"
            );
            return Ok(outcome);
        }

        match result {
            Ok(text) => widget.extracted_text = text,
            Err(_) => widget.notification = Some(Notification::extraction_failed()),
        }
        widget.in_flight = None;
        widget.transition(IntakeState::Ready);

        Ok(outcome)
    }

    /// Stages the extracted text (when there is any) and hands off to the
    /// analysis screen. Empty text still navigates.
    #[tracing::instrument(skip(self), fields(session_id = %self.session_id.as_uuid()))]
    pub async fn confirm(&self) -> Result<ConfirmOutcome, IntakeError> {
        let mut widget = self.widget.lock().await;

        match widget.status {
            IntakeState::Confirmed => return Err(IntakeError::AlreadyConfirmed),
            IntakeState::Validated | IntakeState::Extracting => {
                return Err(IntakeError::ExtractionInProgress);
            }
            IntakeState::Empty | IntakeState::Ready => {}
        }

        if widget.candidate.is_none() {
            return Err(IntakeError::NoCandidate);
        }

        let stored_text = !widget.extracted_text.is_empty();
        if stored_text {
            let key = StorageKey::resume_text(&self.session_id);
            self.store.set(&key, &widget.extracted_text).await?;
            tracing::info!(key = %key, "Resume text staged");
        } else {
            tracing::warn!("Confirming without extracted text");
        }

        // Navigation away unmounts the widget; only the file's metadata stays.
        if let Some(candidate) = widget.candidate.as_mut() {
            candidate.raw_bytes = Bytes::new();
        }
        widget.transition(IntakeState::Confirmed);

        Ok(ConfirmOutcome {
            navigate_to: Route::Analysis,
            stored_text,
        })
    }

    pub async fn dismiss_notification(&self) {
        self.widget.lock().await.notification = None;
    }

    /// Size of the upload payload still held in memory.
    pub async fn buffered_bytes(&self) -> usize {
        self.widget
            .lock()
            .await
            .candidate
            .as_ref()
            .map_or(0, |c| c.raw_bytes.len())
    }

    pub async fn extracted_text(&self) -> String {
        self.widget.lock().await.extracted_text.clone()
    }

    pub async fn snapshot(&self) -> IntakeSnapshot {
        let widget = self.widget.lock().await;
        let has_text = !widget.extracted_text.is_empty();

        IntakeSnapshot {
            status: widget.status,
            file_name: widget.candidate.as_ref().map(|c| c.name.clone()),
            byte_size: widget.candidate.as_ref().map(|c| c.byte_size),
            size_label: widget.candidate.as_ref().map(UploadCandidate::size_label),
            error: widget.error,
            is_processing: widget.status.is_processing(),
            has_text,
            text_preview: has_text.then(|| preview_text(&widget.extracted_text)),
            notification: widget.notification.clone(),
            action_label: if has_text { "Continue" } else { "Processing..." },
        }
    }

    async fn run_extraction(
        &self,
        candidate: &UploadCandidate,
    ) -> Result<String, TextExtractorError> {
        if candidate.content_type().is_none() {
            tracing::warn!(
                mime_type = %candidate.mime_type,
                "No extractor for content type, returning empty text"
            );
            return Ok(String::new());
        }

        match self
            .extractor
            .extract_text(&candidate.raw_bytes, candidate)
            .await
        {
            Ok(text) => {
                tracing::debug!(preview = %preview_text(&text), "Extracted text");
                Ok(text)
            }
            Err(e) => {
                tracing::error!(error = %e, filename = %candidate.name, "Error extracting text");
                Err(e)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("no file has been selected")]
    NoCandidate,
    #[error("text extraction is still in progress")]
    ExtractionInProgress,
    #[error("intake has already been confirmed")]
    AlreadyConfirmed,
    #[error("storage: {0}")]
    Storage(#[from] EphemeralStoreError),
}

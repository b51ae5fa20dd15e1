use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::IntakeSnapshot;
use crate::domain::{
    ContentType, Notification, SessionId, UploadCandidate, ValidationOutcome, size_limit_label,
};
use crate::presentation::state::AppState;

use super::error::{error_response, intake_error_response, lookup_session};

#[derive(Serialize)]
pub struct SessionCreatedResponse {
    pub session_id: String,
}

#[derive(Serialize)]
pub struct SnapshotResponse {
    pub session_id: String,
    pub status: String,
    pub file_name: Option<String>,
    pub byte_size: Option<u64>,
    pub size_label: Option<String>,
    pub error: Option<String>,
    pub is_processing: bool,
    pub has_text: bool,
    pub text_preview: Option<String>,
    pub notification: Option<Notification>,
    pub action_label: String,
}

impl SnapshotResponse {
    fn new(session_id: SessionId, snapshot: IntakeSnapshot) -> Self {
        Self {
            session_id: session_id.as_uuid().to_string(),
            status: snapshot.status.as_str().to_string(),
            file_name: snapshot.file_name,
            byte_size: snapshot.byte_size,
            size_label: snapshot.size_label,
            error: snapshot.error.map(|e| e.message()),
            is_processing: snapshot.is_processing,
            has_text: snapshot.has_text,
            text_preview: snapshot.text_preview,
            notification: snapshot.notification,
            action_label: snapshot.action_label.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct ConfirmResponse {
    pub navigate_to: String,
    pub stored_text: bool,
}

#[derive(Serialize)]
pub struct PolicyResponse {
    pub accepted_mime_types: Vec<String>,
    pub accept: String,
    pub max_upload_bytes: u64,
    pub help_text: String,
}

pub async fn policy_handler(State(state): State<AppState>) -> impl IntoResponse {
    let max_upload_bytes = state.sessions.max_upload_bytes();
    let accepted_mime_types = ContentType::ALL
        .iter()
        .map(|ct| ct.as_mime().to_string())
        .collect();

    (
        StatusCode::OK,
        Json(PolicyResponse {
            accepted_mime_types,
            accept: ContentType::picker_accept(),
            max_upload_bytes,
            help_text: format!(
                "Supported formats: PDF, DOCX (Max size: {})",
                size_limit_label(max_upload_bytes)
            ),
        }),
    )
}

pub async fn create_session_handler(State(state): State<AppState>) -> impl IntoResponse {
    let session = state.sessions.create().await;
    (
        StatusCode::CREATED,
        Json(SessionCreatedResponse {
            session_id: session.id().as_uuid().to_string(),
        }),
    )
}

pub async fn snapshot_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    let snapshot = session.intake().snapshot().await;
    (
        StatusCode::OK,
        Json(SnapshotResponse::new(session.id(), snapshot)),
    )
        .into_response()
}

pub async fn delete_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    state.sessions.remove(session.id()).await;
    StatusCode::NO_CONTENT.into_response()
}

#[tracing::instrument(skip(state, multipart))]
pub async fn upload_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    mut multipart: Multipart,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    let field = match multipart.next_field().await {
        Ok(Some(f)) => f,
        Ok(None) => {
            tracing::warn!("Upload request with no file");
            return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to read multipart");
            return error_response(e.status(), format!("Failed to read multipart: {}", e));
        }
    };

    let filename = field.file_name().unwrap_or("unknown").to_string();
    let mime_type = field
        .content_type()
        .unwrap_or("application/octet-stream")
        .to_string();

    let data = match field.bytes().await {
        Ok(d) => d,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read file bytes");
            return error_response(e.status(), format!("Failed to read file: {}", e));
        }
    };

    tracing::debug!(filename = %filename, mime_type = %mime_type, bytes = data.len(), "File received");

    let candidate = UploadCandidate::new(filename, mime_type, data);
    match session.intake().select(candidate).await {
        Ok(ValidationOutcome::Accepted(_)) => {
            let snapshot = session.intake().snapshot().await;
            (
                StatusCode::OK,
                Json(SnapshotResponse::new(session.id(), snapshot)),
            )
                .into_response()
        }
        Ok(ValidationOutcome::Rejected(err)) => {
            error_response(StatusCode::UNPROCESSABLE_ENTITY, err.message())
        }
        Err(e) => intake_error_response(e),
    }
}

#[tracing::instrument(skip(state))]
pub async fn confirm_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    match session.intake().confirm().await {
        Ok(outcome) => {
            let location = outcome.navigate_to.as_path();
            (
                StatusCode::SEE_OTHER,
                [(header::LOCATION, location)],
                Json(ConfirmResponse {
                    navigate_to: location.to_string(),
                    stored_text: outcome.stored_text,
                }),
            )
                .into_response()
        }
        Err(e) => intake_error_response(e),
    }
}

pub async fn dismiss_notification_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    session.intake().dismiss_notification().await;
    StatusCode::NO_CONTENT.into_response()
}

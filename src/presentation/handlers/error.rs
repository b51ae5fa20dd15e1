use std::sync::Arc;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use uuid::Uuid;

use crate::application::services::{IntakeError, IntakeSession};
use crate::domain::SessionId;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
        .into_response()
}

pub fn intake_error_response(err: IntakeError) -> Response {
    let status = match err {
        IntakeError::NoCandidate
        | IntakeError::ExtractionInProgress
        | IntakeError::AlreadyConfirmed => StatusCode::CONFLICT,
        IntakeError::Storage(_) => {
            tracing::error!(error = %err, "Failed to stage resume text");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    error_response(status, err.to_string())
}

/// Resolves the `{session_id}` path segment to a live session.
pub async fn lookup_session(
    state: &AppState,
    raw_id: &str,
) -> Result<Arc<IntakeSession>, Response> {
    let uuid = Uuid::parse_str(raw_id).map_err(|_| {
        error_response(
            StatusCode::BAD_REQUEST,
            format!("Invalid session ID: {}", raw_id),
        )
    })?;

    state
        .sessions
        .get(SessionId::from_uuid(uuid))
        .await
        .ok_or_else(|| {
            error_response(
                StatusCode::NOT_FOUND,
                format!("Session not found: {}", raw_id),
            )
        })
}

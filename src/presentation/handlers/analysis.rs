use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::RESUME_TEXT_KEY;
use crate::presentation::state::AppState;

use super::error::{error_response, lookup_session};

#[derive(Serialize)]
pub struct ResumeTextResponse {
    pub key: String,
    pub text: String,
}

/// What the analysis screen reads after the upload page navigates to it.
pub async fn resume_text_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    match session.stored_resume_text().await {
        Ok(Some(text)) => (
            StatusCode::OK,
            Json(ResumeTextResponse {
                key: RESUME_TEXT_KEY.to_string(),
                text,
            }),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No resume text has been staged"),
        Err(e) => {
            tracing::error!(error = %e, "Failed to read staged resume text");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Failed to read resume text: {}", e),
            )
        }
    }
}

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::JobDetails;
use crate::presentation::state::AppState;

use super::error::{error_response, lookup_session};

#[tracing::instrument(skip(state, details))]
pub async fn job_details_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(details): Json<JobDetails>,
) -> Response {
    let session = match lookup_session(&state, &session_id).await {
        Ok(s) => s,
        Err(response) => return response,
    };

    match session.set_job_details(details.clone()).await {
        Ok(()) => (StatusCode::OK, Json(details)).into_response(),
        Err(e) => error_response(StatusCode::UNPROCESSABLE_ENTITY, e.to_string()),
    }
}

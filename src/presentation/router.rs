use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{delete, get, post, put};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::presentation::handlers::{
    confirm_handler, create_session_handler, delete_session_handler,
    dismiss_notification_handler, health_handler, job_details_handler, policy_handler,
    resume_text_handler, snapshot_handler, upload_handler,
};
use crate::presentation::state::AppState;

/// Headroom for multipart framing so a file just over the upload limit still
/// reaches validation instead of being cut off by the body limit.
const MULTIPART_OVERHEAD_BYTES: usize = 1024 * 1024;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = usize::try_from(state.sessions.max_upload_bytes())
        .ok()
        .and_then(|max| max.checked_add(MULTIPART_OVERHEAD_BYTES))
        .unwrap_or(usize::MAX);

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/intake/policy", get(policy_handler))
        .route("/api/v1/intake/sessions", post(create_session_handler))
        .route(
            "/api/v1/intake/sessions/{session_id}",
            get(snapshot_handler).delete(delete_session_handler),
        )
        .route(
            "/api/v1/intake/sessions/{session_id}/file",
            post(upload_handler),
        )
        .route(
            "/api/v1/intake/sessions/{session_id}/confirm",
            post(confirm_handler),
        )
        .route(
            "/api/v1/intake/sessions/{session_id}/notification",
            delete(dismiss_notification_handler),
        )
        .route(
            "/api/v1/intake/sessions/{session_id}/job-details",
            put(job_details_handler),
        )
        .route(
            "/api/v1/intake/sessions/{session_id}/resume-text",
            get(resume_text_handler),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}

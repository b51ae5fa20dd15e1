mod extraction_ticket;
mod intake_state;
mod job_details;
mod notification;
mod route;
mod session_id;
mod storage_key;
mod upload_candidate;
mod validation;

pub use extraction_ticket::ExtractionTicket;
pub use intake_state::IntakeState;
pub use job_details::{JobDetails, JobDetailsError};
pub use notification::{Notification, NotificationVariant};
pub use route::Route;
pub use session_id::SessionId;
pub use storage_key::{RESUME_TEXT_KEY, StorageKey};
pub use upload_candidate::{ContentType, DOCX_MIME, PDF_MIME, UploadCandidate};
pub use validation::{
    MAX_UPLOAD_BYTES, ValidationError, ValidationOutcome, size_limit_label, validate_candidate,
};

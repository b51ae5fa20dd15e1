mod analysis;
mod error;
mod health;
mod intake;
mod job_details;

pub use analysis::resume_text_handler;
pub use error::ErrorResponse;
pub use health::health_handler;
pub use intake::{
    confirm_handler, create_session_handler, delete_session_handler,
    dismiss_notification_handler, policy_handler, snapshot_handler, upload_handler,
};
pub use job_details::job_details_handler;

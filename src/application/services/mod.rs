mod intake_sessions;
mod resume_intake;
mod text_preview;

pub use intake_sessions::{DEFAULT_SESSION_IDLE_TTL, IntakeSession, IntakeSessions};
pub use resume_intake::{ConfirmOutcome, IntakeError, IntakeSnapshot, ResumeIntake};
pub use text_preview::preview_text;

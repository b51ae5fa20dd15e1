use std::fmt;

use super::session_id::SessionId;

/// Key under which the extracted resume text is staged for the analysis screen.
pub const RESUME_TEXT_KEY: &str = "resumeText";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(session_id: &SessionId, name: &str) -> Self {
        Self(format!("{}/{}", session_id.as_uuid(), name))
    }

    pub fn resume_text(session_id: &SessionId) -> Self {
        Self::new(session_id, RESUME_TEXT_KEY)
    }

    pub fn from_raw(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

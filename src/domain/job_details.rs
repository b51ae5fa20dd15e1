use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobDetails {
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    pub job_description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum JobDetailsError {
    #[error("job title is required")]
    MissingTitle,
    #[error("job description is required")]
    MissingDescription,
}

impl JobDetails {
    pub fn new(
        job_title: impl Into<String>,
        company: impl Into<String>,
        job_description: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            company: company.into(),
            job_description: job_description.into(),
        }
    }

    /// Company is optional; title and description must be non-blank.
    pub fn validate(&self) -> Result<(), JobDetailsError> {
        if self.job_title.trim().is_empty() {
            return Err(JobDetailsError::MissingTitle);
        }
        if self.job_description.trim().is_empty() {
            return Err(JobDetailsError::MissingDescription);
        }
        Ok(())
    }
}

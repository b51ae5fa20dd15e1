use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::time::Instant;

use crate::application::ports::{EphemeralStore, EphemeralStoreError, TextExtractor};
use crate::domain::{JobDetails, JobDetailsError, SessionId, StorageKey};

use super::resume_intake::ResumeIntake;

/// A mounted upload page: the intake widget plus the job details form beside it.
pub struct IntakeSession {
    id: SessionId,
    intake: ResumeIntake,
    job_details: Mutex<Option<JobDetails>>,
    store: Arc<dyn EphemeralStore>,
    last_seen: Mutex<Instant>,
}

impl IntakeSession {
    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn intake(&self) -> &ResumeIntake {
        &self.intake
    }

    pub async fn set_job_details(&self, details: JobDetails) -> Result<(), JobDetailsError> {
        details.validate()?;
        *self.job_details.lock().await = Some(details);
        Ok(())
    }

    pub async fn job_details(&self) -> Option<JobDetails> {
        self.job_details.lock().await.clone()
    }

    /// Reads the staged resume text the way the analysis screen does.
    pub async fn stored_resume_text(&self) -> Result<Option<String>, EphemeralStoreError> {
        self.store.get(&StorageKey::resume_text(&self.id)).await
    }
}

/// Sessions untouched for this long are dropped along with any upload they hold.
pub const DEFAULT_SESSION_IDLE_TTL: Duration = Duration::from_secs(30 * 60);

pub struct IntakeSessions {
    extractor: Arc<dyn TextExtractor>,
    store: Arc<dyn EphemeralStore>,
    max_upload_bytes: u64,
    idle_ttl: Duration,
    sessions: RwLock<HashMap<SessionId, Arc<IntakeSession>>>,
}

impl IntakeSessions {
    pub fn new(
        extractor: Arc<dyn TextExtractor>,
        store: Arc<dyn EphemeralStore>,
        max_upload_bytes: u64,
    ) -> Self {
        Self {
            extractor,
            store,
            max_upload_bytes,
            idle_ttl: DEFAULT_SESSION_IDLE_TTL,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    pub fn with_idle_ttl(mut self, idle_ttl: Duration) -> Self {
        self.idle_ttl = idle_ttl;
        self
    }

    pub fn max_upload_bytes(&self) -> u64 {
        self.max_upload_bytes
    }

    pub fn idle_ttl(&self) -> Duration {
        self.idle_ttl
    }

    pub async fn create(&self) -> Arc<IntakeSession> {
        self.evict_idle().await;

        let id = SessionId::new();
        let session = Arc::new(IntakeSession {
            id,
            intake: ResumeIntake::new(
                id,
                Arc::clone(&self.extractor),
                Arc::clone(&self.store),
                self.max_upload_bytes,
            ),
            job_details: Mutex::new(None),
            store: Arc::clone(&self.store),
            last_seen: Mutex::new(Instant::now()),
        });

        self.sessions.write().await.insert(id, Arc::clone(&session));
        tracing::debug!(session_id = %id.as_uuid(), "Intake session created");
        session
    }

    /// Looks up a live session and marks it as used.
    pub async fn get(&self, id: SessionId) -> Option<Arc<IntakeSession>> {
        self.evict_idle().await;

        let session = self.sessions.read().await.get(&id).cloned()?;
        *session.last_seen.lock().await = Instant::now();
        Some(session)
    }

    /// Drops every session idle for at least the configured TTL. Staged text
    /// stays in the store.
    pub async fn evict_idle(&self) -> usize {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;

        let mut expired = Vec::new();
        for (id, session) in sessions.iter() {
            let last_seen = *session.last_seen.lock().await;
            if now.duration_since(last_seen) >= self.idle_ttl {
                expired.push(*id);
            }
        }

        for id in &expired {
            sessions.remove(id);
        }

        if !expired.is_empty() {
            tracing::info!(
                evicted = expired.len(),
                remaining = sessions.len(),
                "Evicted idle intake sessions"
            );
        }
        expired.len()
    }

    /// Drops the widget's transient state. Staged text stays in the store.
    pub async fn remove(&self, id: SessionId) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            tracing::debug!(session_id = %id.as_uuid(), "Intake session removed");
        }
        removed
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

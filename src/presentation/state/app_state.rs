use std::sync::Arc;

use crate::application::services::IntakeSessions;

#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<IntakeSessions>,
}

impl AppState {
    pub fn new(sessions: Arc<IntakeSessions>) -> Self {
        Self { sessions }
    }
}

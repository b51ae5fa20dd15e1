use std::path::PathBuf;
use std::sync::Arc;

use crate::application::ports::{EphemeralStore, EphemeralStoreError};
use crate::presentation::config::{StorageProviderSetting, StorageSettings};

use super::local_store::LocalEphemeralStore;
use super::memory_store::InMemoryEphemeralStore;

pub struct EphemeralStoreFactory;

impl EphemeralStoreFactory {
    pub fn create(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn EphemeralStore>, EphemeralStoreError> {
        match settings.provider {
            StorageProviderSetting::Memory => {
                tracing::info!("Using in-memory ephemeral store");
                Ok(Arc::new(InMemoryEphemeralStore::new()))
            }
            StorageProviderSetting::Local => {
                let path = PathBuf::from(&settings.local_path);
                tracing::info!(path = %path.display(), "Using local ephemeral store");
                Ok(Arc::new(LocalEphemeralStore::new(path)?))
            }
        }
    }
}

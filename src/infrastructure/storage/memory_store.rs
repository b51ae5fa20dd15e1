use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::application::ports::{EphemeralStore, EphemeralStoreError};
use crate::domain::StorageKey;

#[derive(Default)]
pub struct InMemoryEphemeralStore {
    entries: RwLock<HashMap<StorageKey, String>>,
}

impl InMemoryEphemeralStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl EphemeralStore for InMemoryEphemeralStore {
    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), EphemeralStoreError> {
        self.entries
            .write()
            .await
            .insert(key.clone(), value.to_string());
        Ok(())
    }

    async fn get(&self, key: &StorageKey) -> Result<Option<String>, EphemeralStoreError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn remove(&self, key: &StorageKey) -> Result<(), EphemeralStoreError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

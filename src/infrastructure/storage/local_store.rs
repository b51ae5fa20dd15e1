use std::path::PathBuf;
use std::sync::Arc;

use bytes::Bytes;
use object_store::local::LocalFileSystem;
use object_store::path::Path as StorePath;
use object_store::{ObjectStore, PutPayload};

use crate::application::ports::{EphemeralStore, EphemeralStoreError};
use crate::domain::StorageKey;

/// File-backed store: one object per key under `base_path`, so staged text
/// survives a restart.
pub struct LocalEphemeralStore {
    inner: Arc<LocalFileSystem>,
}

impl LocalEphemeralStore {
    pub fn new(base_path: PathBuf) -> Result<Self, EphemeralStoreError> {
        std::fs::create_dir_all(&base_path)?;
        let fs = LocalFileSystem::new_with_prefix(base_path)
            .map_err(|e| EphemeralStoreError::WriteFailed(e.to_string()))?;
        Ok(Self {
            inner: Arc::new(fs),
        })
    }
}

#[async_trait::async_trait]
impl EphemeralStore for LocalEphemeralStore {
    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), EphemeralStoreError> {
        let store_path = StorePath::from(key.as_str());
        self.inner
            .put(&store_path, PutPayload::from(Bytes::from(value.to_owned())))
            .await
            .map_err(|e| EphemeralStoreError::WriteFailed(e.to_string()))?;
        Ok(())
    }

    async fn get(&self, key: &StorageKey) -> Result<Option<String>, EphemeralStoreError> {
        let store_path = StorePath::from(key.as_str());
        let result = match self.inner.get(&store_path).await {
            Ok(result) => result,
            Err(object_store::Error::NotFound { .. }) => return Ok(None),
            Err(e) => return Err(EphemeralStoreError::ReadFailed(e.to_string())),
        };

        let bytes = result
            .bytes()
            .await
            .map_err(|e| EphemeralStoreError::ReadFailed(e.to_string()))?;

        String::from_utf8(bytes.to_vec())
            .map(Some)
            .map_err(|e| EphemeralStoreError::InvalidValue(e.to_string()))
    }

    async fn remove(&self, key: &StorageKey) -> Result<(), EphemeralStoreError> {
        let store_path = StorePath::from(key.as_str());
        match self.inner.delete(&store_path).await {
            Ok(()) | Err(object_store::Error::NotFound { .. }) => Ok(()),
            Err(e) => Err(EphemeralStoreError::RemoveFailed(e.to_string())),
        }
    }
}

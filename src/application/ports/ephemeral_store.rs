use crate::domain::StorageKey;

/// Small key-value store standing in for browser-local storage.
#[async_trait::async_trait]
pub trait EphemeralStore: Send + Sync {
    async fn set(&self, key: &StorageKey, value: &str) -> Result<(), EphemeralStoreError>;

    async fn get(&self, key: &StorageKey) -> Result<Option<String>, EphemeralStoreError>;

    async fn remove(&self, key: &StorageKey) -> Result<(), EphemeralStoreError>;
}

#[derive(Debug, thiserror::Error)]
pub enum EphemeralStoreError {
    #[error("write failed: {0}")]
    WriteFailed(String),
    #[error("read failed: {0}")]
    ReadFailed(String),
    #[error("remove failed: {0}")]
    RemoveFailed(String),
    #[error("stored value is not valid UTF-8: {0}")]
    InvalidValue(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

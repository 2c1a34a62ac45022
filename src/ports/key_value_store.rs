//! Key-Value Store Port - Interface for the local persisted key space.
//!
//! The application keeps all durable state as string values under a handful
//! of string keys, the way a browser's local storage would. This port hides
//! where those strings actually live.

use async_trait::async_trait;

/// Keys owned by the application.
pub mod keys {
    pub const SUBSCRIPTION_STATUS: &str = "bioclave_subscription_status";
    pub const SEARCH_COUNT: &str = "bioclave_search_count";
    pub const JOURNAL_ENTRIES: &str = "journalEntries";
    pub const LOCALE: &str = "bioclave_locale";
    pub const DISCLAIMER_SHOWN: &str = "disclaimerShown";

    /// Every key erased on logout.
    pub const ALL: [&str; 5] = [
        JOURNAL_ENTRIES,
        DISCLAIMER_SHOWN,
        LOCALE,
        SUBSCRIPTION_STATUS,
        SEARCH_COUNT,
    ];
}

/// Errors that can occur during store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Failed to serialize store: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize store: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),
}

/// Port for reading and writing persisted string values
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the value under `key`, `None` when absent
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Write `value` under `key`, replacing any previous value
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;

    /// Whether `key` currently has a value
    async fn contains(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.get(key).await?.is_some())
    }
}

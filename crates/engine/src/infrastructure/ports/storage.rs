//! Key-value persistence port.

use async_trait::async_trait;

use super::error::StorageError;

/// Asynchronous string key-value storage.
///
/// Stores keep one JSON record per key; the backend never interprets the
/// values it holds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Load the value under `key`, `None` when nothing was stored.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

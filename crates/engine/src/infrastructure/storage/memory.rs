//! In-process key-value storage.
//!
//! Nothing survives the process. Used for tests and `WORLDEXPLORER_STORAGE=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::infrastructure::ports::{KeyValueStore, StorageError};

#[derive(Default)]
pub struct MemoryKeyValueStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let store = MemoryKeyValueStore::new();
        assert!(store.is_empty().await);

        store.set("k", "v1").await.expect("set");
        store.set("k", "v2").await.expect("overwrite");
        assert_eq!(store.get("k").await.expect("get").as_deref(), Some("v2"));
        assert_eq!(store.len().await, 1);

        store.remove("k").await.expect("remove");
        store.remove("k").await.expect("remove missing key");
        assert_eq!(store.get("k").await.expect("get"), None);
    }
}

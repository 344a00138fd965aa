//! File-backed key-value storage.
//!
//! Stores all key-value pairs as one JSON object at:
//! - Linux: ~/.config/worldexplorer/storage.json
//! - macOS: ~/Library/Application Support/io.worldexplorer.worldexplorer/storage.json
//! - Windows: C:\Users\<User>\AppData\Roaming\worldexplorer\worldexplorer\config\storage.json

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use directories::ProjectDirs;
use tokio::fs;
use tokio::sync::Mutex;

use crate::infrastructure::ports::{KeyValueStore, StorageError};

const FALLBACK_FILE: &str = "worldexplorer_storage.json";

pub struct FileKeyValueStore {
    path: PathBuf,
    /// In-memory copy of the file; the mutex also serializes file writes
    cache: Mutex<HashMap<String, String>>,
}

impl FileKeyValueStore {
    /// Platform config location, or the working directory when no home
    /// directory can be determined.
    pub fn default_path() -> PathBuf {
        match ProjectDirs::from("io", "worldexplorer", "worldexplorer") {
            Some(dirs) => dirs.config_dir().join("storage.json"),
            None => PathBuf::from(FALLBACK_FILE),
        }
    }

    /// Open the store at `path`, loading existing entries.
    ///
    /// A missing file starts empty. A file that cannot be read is an error.
    /// A file that is not a JSON object is moved aside to
    /// `<name>.corrupt` and the store starts empty.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let cache = match fs::read_to_string(&path).await {
            Ok(data) => match serde_json::from_str::<HashMap<String, String>>(&data) {
                Ok(map) => map,
                Err(e) => {
                    let aside = path.with_extension("json.corrupt");
                    tracing::warn!(
                        path = %path.display(),
                        moved_to = %aside.display(),
                        error = %e,
                        "Storage file is corrupt, starting empty"
                    );
                    fs::rename(&path, &aside)
                        .await
                        .map_err(|e| StorageError::backend("open", path.display().to_string(), e))?;
                    HashMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read storage file");
                return Err(StorageError::backend("open", path.display().to_string(), e));
            }
        };

        tracing::debug!(path = %path.display(), entries = cache.len(), "File storage initialized");

        Ok(Self {
            path,
            cache: Mutex::new(cache),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the whole map to disk via a temp file and rename.
    async fn persist(
        &self,
        cache: &HashMap<String, String>,
        operation: &'static str,
        key: &str,
    ) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::backend(operation, key, e))?;
            }
        }

        let data = serde_json::to_string_pretty(cache)
            .map_err(|e| StorageError::backend(operation, key, e))?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)
            .await
            .map_err(|e| StorageError::backend(operation, key, e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StorageError::backend(operation, key, e))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.cache.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().await;
        let previous = cache.insert(key.to_string(), value.to_string());

        if let Err(e) = self.persist(&cache, "set", key).await {
            // Keep the cache in step with what is on disk
            match previous {
                Some(old) => cache.insert(key.to_string(), old),
                None => cache.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut cache = self.cache.lock().await;
        let Some(previous) = cache.remove(key) else {
            return Ok(());
        };

        if let Err(e) = self.persist(&cache, "remove", key).await {
            cache.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_at(path: &Path) -> FileKeyValueStore {
        FileKeyValueStore::open(path).await.expect("open")
    }

    #[tokio::test]
    async fn values_survive_reopen() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("storage.json");

        let store = open_at(&path).await;
        store.set("academy_progress", "{\"intro\":true}").await.expect("set");
        store.set("other", "1").await.expect("set");
        store.remove("other").await.expect("remove");

        let reopened = open_at(&path).await;
        assert_eq!(
            reopened.get("academy_progress").await.expect("get").as_deref(),
            Some("{\"intro\":true}")
        );
        assert_eq!(reopened.get("other").await.expect("get"), None);
    }

    #[tokio::test]
    async fn corrupt_file_is_moved_aside() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").expect("write");

        let store = open_at(&path).await;
        assert_eq!(store.get("anything").await.expect("get"), None);

        let aside = dir.path().join("storage.json.corrupt");
        assert_eq!(
            std::fs::read_to_string(&aside).expect("corrupt copy kept"),
            "not json"
        );

        store.set("k", "v").await.expect("set");
        let reopened = open_at(&path).await;
        assert_eq!(reopened.get("k").await.expect("get").as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn unreadable_file_fails_to_open() {
        let dir = tempfile::tempdir().expect("tempdir");
        // A directory where the file should be cannot be read as text
        let path = dir.path().join("storage.json");
        std::fs::create_dir(&path).expect("mkdir");

        let err = FileKeyValueStore::open(&path)
            .await
            .err()
            .expect("read fails");
        assert!(matches!(err, StorageError::Backend { operation: "open", .. }));
        assert!(path.is_dir());
    }
}

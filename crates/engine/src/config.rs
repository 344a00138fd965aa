//! Application configuration

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use crate::infrastructure::ports::{KeyValueStore, StorageError};
use crate::infrastructure::storage::{FileKeyValueStore, MemoryKeyValueStore};

pub const STORAGE_ENV: &str = "WORLDEXPLORER_STORAGE";
pub const STORAGE_PATH_ENV: &str = "WORLDEXPLORER_STORAGE_PATH";
pub const FLIGHT_SECS_ENV: &str = "WORLDEXPLORER_FLIGHT_SECS";

const DEFAULT_FLIGHT_SECS: u64 = 5;

/// Where store records are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    Memory,
    #[default]
    File,
}

/// Application configuration loaded from environment
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage: StorageBackend,
    /// JSON file for the file backend, platform config dir when unset
    pub storage_path: Option<PathBuf>,
    /// Simulated flight time
    pub flight_duration: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            storage_path: None,
            flight_duration: Duration::from_secs(DEFAULT_FLIGHT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`. Unusable values are logged and
    /// the default is kept.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(STORAGE_ENV) {
            match raw.trim().to_ascii_lowercase().as_str() {
                "memory" => config.storage = StorageBackend::Memory,
                "file" => config.storage = StorageBackend::File,
                other => tracing::warn!(
                    value = other,
                    "Unknown {}, keeping file storage",
                    STORAGE_ENV
                ),
            }
        }

        config.storage_path = lookup(STORAGE_PATH_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        if let Some(raw) = lookup(FLIGHT_SECS_ENV) {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.flight_duration = Duration::from_secs(secs),
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    "Invalid {}, keeping {}s",
                    FLIGHT_SECS_ENV,
                    DEFAULT_FLIGHT_SECS
                ),
            }
        }

        config
    }

    /// Open the configured storage backend.
    pub async fn build_storage(&self) -> Result<Arc<dyn KeyValueStore>, StorageError> {
        match self.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory storage");
                Ok(Arc::new(MemoryKeyValueStore::new()))
            }
            StorageBackend::File => {
                let path = self
                    .storage_path
                    .clone()
                    .unwrap_or_else(FileKeyValueStore::default_path);
                tracing::info!(path = %path.display(), "Using file storage");
                Ok(Arc::new(FileKeyValueStore::open(path).await?))
            }
        }
    }
}

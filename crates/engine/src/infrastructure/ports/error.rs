//! Error types for port operations.

use worldexplorer_domain::DomainError;

/// Key-value backend errors with context for debugging.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StorageError {
    /// Backend I/O failed - includes operation and key for tracing.
    #[error("Storage error in {operation} for '{key}': {message}")]
    Backend {
        operation: &'static str,
        key: String,
        message: String,
    },
}

impl StorageError {
    /// Create a Backend error with operation and key context.
    pub fn backend(operation: &'static str, key: impl Into<String>, message: impl ToString) -> Self {
        Self::Backend {
            operation,
            key: key.into(),
            message: message.to_string(),
        }
    }
}

/// Errors surfaced by the persisted stores.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Record could not be encoded or decoded.
    #[error("Serialization error for '{key}': {message}")]
    Serialization { key: &'static str, message: String },

    /// The store's writer task is gone; the write was never attempted.
    #[error("Writer for '{key}' is no longer running")]
    WriterClosed { key: &'static str },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// Create a Serialization error.
    pub fn serialization(key: &'static str, message: impl ToString) -> Self {
        Self::Serialization {
            key,
            message: message.to_string(),
        }
    }

    /// Check if this error came from the storage backend.
    pub fn is_storage(&self) -> bool {
        matches!(self, Self::Storage(_))
    }
}

//! Write-behind persistence for the stores.
//!
//! Each store owns one [`WriteBehind`] bound to its storage key. Mutations
//! enqueue a serialized snapshot while the store's write lock is held, and a
//! dedicated writer task drains the queue in order, so the durable sequence
//! of records always matches the in-memory sequence.
//!
//! Every enqueue hands back a [`PendingWrite`]. Awaiting it reports whether
//! that snapshot reached storage; dropping it leaves the write running in
//! the background. Failures are logged by the writer either way.

use std::future::{Future, IntoFuture};
use std::pin::Pin;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::{mpsc, oneshot};

use crate::infrastructure::ports::{KeyValueStore, StoreError};

/// Load and decode the record under `key`.
///
/// Returns `Ok(None)` when nothing has been stored yet.
pub async fn load_record<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &'static str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = storage.get(key).await? else {
        tracing::debug!(key, "No persisted record, using defaults");
        return Ok(None);
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| StoreError::serialization(key, e))
}

enum WriteOp {
    Put(String),
    Delete,
}

struct WriteRequest {
    op: WriteOp,
    ack: oneshot::Sender<Result<(), StoreError>>,
}

/// Ordered, asynchronous writer for a single storage key.
pub struct WriteBehind {
    key: &'static str,
    tx: mpsc::UnboundedSender<WriteRequest>,
}

impl WriteBehind {
    /// Spawn the writer task on the current tokio runtime.
    ///
    /// The task exits once this handle is dropped and the queue is drained.
    pub fn spawn(storage: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(storage, key, rx));
        Self { key, tx }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Queue `record` to replace the stored value.
    pub fn put<T: Serialize>(&self, record: &T) -> PendingWrite {
        match serde_json::to_string(record) {
            Ok(json) => self.enqueue(WriteOp::Put(json)),
            Err(e) => {
                let err = StoreError::serialization(self.key, e);
                tracing::error!(key = self.key, error = %err, "Failed to encode store record");
                PendingWrite::done(self.key, Err(err))
            }
        }
    }

    /// Queue removal of the stored value.
    pub fn delete(&self) -> PendingWrite {
        self.enqueue(WriteOp::Delete)
    }

    fn enqueue(&self, op: WriteOp) -> PendingWrite {
        let (ack, rx) = oneshot::channel();
        if self.tx.send(WriteRequest { op, ack }).is_err() {
            tracing::error!(key = self.key, "Write-behind queue closed, dropping write");
            return PendingWrite::done(self.key, Err(StoreError::WriterClosed { key: self.key }));
        }
        PendingWrite {
            key: self.key,
            state: PendingState::Waiting(rx),
        }
    }
}

async fn run_writer(
    storage: Arc<dyn KeyValueStore>,
    key: &'static str,
    mut rx: mpsc::UnboundedReceiver<WriteRequest>,
) {
    while let Some(request) = rx.recv().await {
        let result = match &request.op {
            WriteOp::Put(json) => storage.set(key, json).await,
            WriteOp::Delete => storage.remove(key).await,
        }
        .map_err(StoreError::from);

        match &result {
            Ok(()) => tracing::debug!(key, "Persisted store record"),
            Err(e) => tracing::error!(key, error = %e, "Failed to persist store record"),
        }

        // Receiver gone means the caller detached.
        let _ = request.ack.send(result);
    }
    tracing::debug!(key, "Write-behind writer stopped");
}

enum PendingState {
    Done(Result<(), StoreError>),
    Waiting(oneshot::Receiver<Result<(), StoreError>>),
}

/// Durability handle for one store mutation.
///
/// The in-memory effect is already visible when this is returned.
pub struct PendingWrite {
    key: &'static str,
    state: PendingState,
}

impl PendingWrite {
    /// A mutation that had nothing to persist (e.g. unknown id).
    pub fn skipped(key: &'static str) -> Self {
        Self::done(key, Ok(()))
    }

    fn done(key: &'static str, result: Result<(), StoreError>) -> Self {
        Self {
            key,
            state: PendingState::Done(result),
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Wait until the write has reached storage.
    pub async fn durable(self) -> Result<(), StoreError> {
        match self.state {
            PendingState::Done(result) => result,
            PendingState::Waiting(rx) => rx
                .await
                .unwrap_or(Err(StoreError::WriterClosed { key: self.key })),
        }
    }

    /// Let the write finish in the background.
    pub fn detach(self) {}
}

impl IntoFuture for PendingWrite {
    type Output = Result<(), StoreError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.durable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{MockKeyValueStore, StorageError};
    use crate::infrastructure::storage::MemoryKeyValueStore;

    #[tokio::test]
    async fn writes_land_in_enqueue_order() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let writer = WriteBehind::spawn(storage.clone(), "ordered");

        for n in 0..20 {
            writer.put(&n).detach();
        }
        writer.put(&20).await.expect("final write");

        let stored = storage.get("ordered").await.expect("get");
        assert_eq!(stored.as_deref(), Some("20"));
    }

    #[tokio::test]
    async fn backend_failure_reaches_the_awaiting_caller() {
        let mut storage = MockKeyValueStore::new();
        storage
            .expect_set()
            .returning(|key, _| Err(StorageError::backend("set", key, "disk full")));

        let writer = WriteBehind::spawn(Arc::new(storage), "failing");
        let err = writer.put(&"value").await.expect_err("write fails");
        assert!(err.is_storage());
    }

    #[tokio::test]
    async fn delete_removes_the_key() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let writer = WriteBehind::spawn(storage.clone(), "gone");

        writer.put(&1).await.expect("put");
        writer.delete().await.expect("delete");

        assert_eq!(storage.get("gone").await.expect("get"), None);
    }

    #[tokio::test]
    async fn skipped_write_is_immediately_durable() {
        assert!(PendingWrite::skipped("noop").await.is_ok());
    }

    #[tokio::test]
    async fn load_record_reports_corrupt_json() {
        let storage = MemoryKeyValueStore::new();
        storage.set("broken", "{not json").await.expect("seed");

        let err = load_record::<Vec<u32>>(&storage, "broken")
            .await
            .expect_err("corrupt record");
        assert!(matches!(err, StoreError::Serialization { key: "broken", .. }));
    }
}

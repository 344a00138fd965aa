//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Key-value persistence (could swap JSON file -> SQLite/platform storage)
//! - Clock (for testing)

mod error;
mod storage;
mod testing;

pub use error::{StorageError, StoreError};
pub use storage::KeyValueStore;
pub use testing::ClockPort;

#[cfg(test)]
pub use storage::MockKeyValueStore;
#[cfg(test)]
pub use testing::MockClockPort;

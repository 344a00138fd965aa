//! Lock wrapper shared by the stores.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// In-memory store state.
///
/// Mutations replace the whole value, so a poisoned lock still holds a
/// consistent record and is recovered rather than propagated.
pub(crate) struct StoreState<T> {
    inner: RwLock<T>,
}

impl<T: Clone> StoreState<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            inner: RwLock::new(value),
        }
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn snapshot(&self) -> T {
        self.read().clone()
    }
}

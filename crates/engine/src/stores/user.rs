//! User progression store.
//!
//! Holds the explorer profile. The profile is absent until the first
//! `update`, which creates it from the built-in default explorer.

use std::sync::Arc;

use worldexplorer_domain::{Avatar, User, UserPatch};

use crate::infrastructure::persistence::{load_record, PendingWrite, WriteBehind};
use crate::infrastructure::ports::{ClockPort, KeyValueStore, StoreError};

use super::state::StoreState;

pub const USER_STORAGE_KEY: &str = "user-storage";

pub struct UserStore {
    state: StoreState<Option<User>>,
    writer: WriteBehind,
    clock: Arc<dyn ClockPort>,
}

impl UserStore {
    /// Hydrate from storage, surfacing read and decode failures.
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Result<Self, StoreError> {
        let user = load_record::<User>(storage.as_ref(), USER_STORAGE_KEY).await?;
        Ok(Self::with_user(user, storage, clock))
    }

    /// Hydrate from storage, starting without a profile if the record
    /// cannot be read.
    pub async fn open_or_default(
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let user = load_record::<User>(storage.as_ref(), USER_STORAGE_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load user profile, starting without one");
                None
            });
        Self::with_user(user, storage, clock)
    }

    fn with_user(
        user: Option<User>,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            state: StoreState::new(user),
            writer: WriteBehind::spawn(storage, USER_STORAGE_KEY),
            clock,
        }
    }

    pub fn get(&self) -> Option<User> {
        self.state.snapshot()
    }

    /// Merge `patch` into the current user, or into the default explorer
    /// when there is none, and stamp `last_active`.
    pub fn update(&self, patch: UserPatch) -> PendingWrite {
        let now = self.clock.now();
        let mut user = self.state.write();

        let base = match user.take() {
            Some(existing) => existing,
            None => {
                tracing::info!("Creating explorer profile from defaults");
                User::default_explorer(now)
            }
        };
        let updated = base.merge(patch, now);

        tracing::debug!(user_id = %updated.id, "Updated explorer profile");
        let pending = self.writer.put(&updated);
        *user = Some(updated);
        pending
    }

    /// Replace the avatar wholesale. Without a profile this does nothing.
    pub fn update_avatar(&self, avatar: Avatar) -> PendingWrite {
        let now = self.clock.now();
        let mut user = self.state.write();

        let Some(current) = user.as_ref() else {
            tracing::debug!("Ignoring avatar update, no explorer profile exists");
            return PendingWrite::skipped(USER_STORAGE_KEY);
        };

        let updated = User {
            avatar,
            last_active: now,
            ..current.clone()
        };

        tracing::debug!(user_id = %updated.id, avatar_id = %updated.avatar.id, "Replaced avatar");
        let pending = self.writer.put(&updated);
        *user = Some(updated);
        pending
    }

    /// Clear the profile and delete the persisted record.
    pub fn reset(&self) -> PendingWrite {
        let mut user = self.state.write();
        *user = None;
        tracing::info!("Explorer profile reset");
        self.writer.delete()
    }
}

//! Mission store.
//!
//! Catalog of missions with per-mission progress. Mutations are id-keyed
//! and rebuild the list. Progress values are stored exactly as given.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use worldexplorer_domain::{Mission, MissionCategory, MissionId};

use crate::infrastructure::persistence::{load_record, PendingWrite, WriteBehind};
use crate::infrastructure::ports::{KeyValueStore, StoreError};

use super::state::StoreState;

pub const MISSION_STORAGE_KEY: &str = "mission-storage";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MissionRecord {
    pub missions: Vec<Mission>,
}

/// Category selector for the missions screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(MissionCategory),
}

impl CategoryFilter {
    pub fn matches(self, mission: &Mission) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => mission.category == category,
        }
    }
}

/// Mission counts shown in the summary header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MissionStats {
    pub completed: usize,
    /// Unlocked and not completed
    pub available: usize,
    pub locked: usize,
}

pub struct MissionStore {
    state: StoreState<MissionRecord>,
    writer: WriteBehind,
}

impl MissionStore {
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        seed: Vec<Mission>,
    ) -> Result<Self, StoreError> {
        let record = load_record::<MissionRecord>(storage.as_ref(), MISSION_STORAGE_KEY).await?;
        Ok(Self::with_record(
            record.unwrap_or(MissionRecord { missions: seed }),
            storage,
        ))
    }

    pub async fn open_or_default(storage: Arc<dyn KeyValueStore>, seed: Vec<Mission>) -> Self {
        let record = load_record::<MissionRecord>(storage.as_ref(), MISSION_STORAGE_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load missions, using seed catalog");
                None
            });
        Self::with_record(record.unwrap_or(MissionRecord { missions: seed }), storage)
    }

    fn with_record(record: MissionRecord, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: StoreState::new(record),
            writer: WriteBehind::spawn(storage, MISSION_STORAGE_KEY),
        }
    }

    pub fn list_missions(&self) -> Vec<Mission> {
        self.state.read().missions.clone()
    }

    pub fn mission(&self, id: &MissionId) -> Option<Mission> {
        self.state.read().missions.iter().find(|m| &m.id == id).cloned()
    }

    pub fn missions_in(&self, filter: CategoryFilter) -> Vec<Mission> {
        self.state
            .read()
            .missions
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> MissionStats {
        self.state
            .read()
            .missions
            .iter()
            .fold(MissionStats::default(), |mut stats, m| {
                if m.completed {
                    stats.completed += 1;
                }
                if m.is_available() {
                    stats.available += 1;
                }
                if !m.unlocked {
                    stats.locked += 1;
                }
                stats
            })
    }

    pub fn snapshot(&self) -> MissionRecord {
        self.state.snapshot()
    }

    /// Overwrite a mission's progress. The value is not clamped and does
    /// not touch `completed`.
    pub fn update_progress(&self, id: &MissionId, progress: i32) -> PendingWrite {
        self.rebuild_mission(id, "progress", |m| m.with_progress(progress))
    }

    /// Mark a mission completed with progress 100.
    pub fn complete_mission(&self, id: &MissionId) -> PendingWrite {
        self.rebuild_mission(id, "complete", Mission::completed)
    }

    pub fn unlock_mission(&self, id: &MissionId) -> PendingWrite {
        self.rebuild_mission(id, "unlock", Mission::unlocked)
    }

    fn rebuild_mission(
        &self,
        id: &MissionId,
        action: &'static str,
        apply: impl Fn(&Mission) -> Mission,
    ) -> PendingWrite {
        let mut record = self.state.write();

        if !record.missions.iter().any(|m| &m.id == id) {
            tracing::debug!(mission_id = %id, action, "Unknown mission, nothing to change");
            return PendingWrite::skipped(MISSION_STORAGE_KEY);
        }

        let next = MissionRecord {
            missions: record
                .missions
                .iter()
                .map(|m| if &m.id == id { apply(m) } else { m.clone() })
                .collect(),
        };

        tracing::debug!(mission_id = %id, action, "Updated mission");
        let pending = self.writer.put(&next);
        *record = next;
        pending
    }
}

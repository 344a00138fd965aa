//! Flight route store.
//!
//! Holds the route catalog plus two single-slot selections: the current
//! route and the current waypoint. Routes are only ever changed by id-keyed
//! flag toggles, and every toggle rebuilds the route list.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use worldexplorer_domain::{FlightRoute, RouteId, Waypoint};

use crate::infrastructure::persistence::{load_record, PendingWrite, WriteBehind};
use crate::infrastructure::ports::{KeyValueStore, StoreError};

use super::state::StoreState;

pub const FLIGHT_STORAGE_KEY: &str = "flight-storage";

/// Persisted shape of the flight store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRecord {
    pub routes: Vec<FlightRoute>,
    pub current_route: Option<FlightRoute>,
    pub current_waypoint: Option<Waypoint>,
}

impl FlightRecord {
    /// Fresh record over a seed catalog, nothing selected
    pub fn seeded(routes: Vec<FlightRoute>) -> Self {
        Self {
            routes,
            current_route: None,
            current_waypoint: None,
        }
    }
}

pub struct FlightStore {
    state: StoreState<FlightRecord>,
    writer: WriteBehind,
}

impl FlightStore {
    /// Hydrate from storage, falling back to `seed` when nothing is stored.
    ///
    /// Read and decode failures are returned.
    pub async fn open(
        storage: Arc<dyn KeyValueStore>,
        seed: Vec<FlightRoute>,
    ) -> Result<Self, StoreError> {
        let record = load_record::<FlightRecord>(storage.as_ref(), FLIGHT_STORAGE_KEY).await?;
        Ok(Self::with_record(
            record.unwrap_or_else(|| FlightRecord::seeded(seed)),
            storage,
        ))
    }

    /// Hydrate from storage, falling back to `seed` on any failure.
    pub async fn open_or_default(storage: Arc<dyn KeyValueStore>, seed: Vec<FlightRoute>) -> Self {
        let record = load_record::<FlightRecord>(storage.as_ref(), FLIGHT_STORAGE_KEY)
            .await
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to load flight routes, using seed catalog");
                None
            });
        Self::with_record(record.unwrap_or_else(|| FlightRecord::seeded(seed)), storage)
    }

    fn with_record(record: FlightRecord, storage: Arc<dyn KeyValueStore>) -> Self {
        Self {
            state: StoreState::new(record),
            writer: WriteBehind::spawn(storage, FLIGHT_STORAGE_KEY),
        }
    }

    /// All routes in catalog order.
    pub fn list_routes(&self) -> Vec<FlightRoute> {
        self.state.read().routes.clone()
    }

    pub fn route(&self, id: &RouteId) -> Option<FlightRoute> {
        self.state.read().routes.iter().find(|r| &r.id == id).cloned()
    }

    pub fn current_route(&self) -> Option<FlightRoute> {
        self.state.read().current_route.clone()
    }

    pub fn current_waypoint(&self) -> Option<Waypoint> {
        self.state.read().current_waypoint.clone()
    }

    pub fn snapshot(&self) -> FlightRecord {
        self.state.snapshot()
    }

    /// Overwrite the current-route slot.
    pub fn set_current_route(&self, route: FlightRoute) -> PendingWrite {
        let mut record = self.state.write();
        tracing::debug!(route_id = %route.id, "Selected current route");
        let next = FlightRecord {
            current_route: Some(route),
            ..record.clone()
        };
        let pending = self.writer.put(&next);
        *record = next;
        pending
    }

    /// Overwrite the current-waypoint slot.
    pub fn set_current_waypoint(&self, waypoint: Waypoint) -> PendingWrite {
        let mut record = self.state.write();
        tracing::debug!(waypoint_id = %waypoint.id, "Selected current waypoint");
        let next = FlightRecord {
            current_waypoint: Some(waypoint),
            ..record.clone()
        };
        let pending = self.writer.put(&next);
        *record = next;
        pending
    }

    /// Mark a route unlocked. Unknown ids are ignored.
    pub fn unlock_route(&self, id: &RouteId) -> PendingWrite {
        self.rebuild_route(id, "unlock", FlightRoute::unlocked)
    }

    /// Mark a route completed. Unknown ids are ignored.
    pub fn complete_route(&self, id: &RouteId) -> PendingWrite {
        self.rebuild_route(id, "complete", FlightRoute::completed)
    }

    fn rebuild_route(
        &self,
        id: &RouteId,
        action: &'static str,
        apply: impl Fn(&FlightRoute) -> FlightRoute,
    ) -> PendingWrite {
        let mut record = self.state.write();

        if !record.routes.iter().any(|r| &r.id == id) {
            tracing::debug!(route_id = %id, action, "Unknown route, nothing to change");
            return PendingWrite::skipped(FLIGHT_STORAGE_KEY);
        }

        let routes = record
            .routes
            .iter()
            .map(|r| if &r.id == id { apply(r) } else { r.clone() })
            .collect();
        let next = FlightRecord {
            routes,
            ..record.clone()
        };

        tracing::debug!(route_id = %id, action, "Updated route");
        let pending = self.writer.put(&next);
        *record = next;
        pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_routes;
    use crate::infrastructure::ports::{MockKeyValueStore, StorageError};
    use crate::infrastructure::storage::MemoryKeyValueStore;

    async fn seeded_store(storage: Arc<MemoryKeyValueStore>) -> FlightStore {
        FlightStore::open(storage, sample_routes())
            .await
            .expect("open")
    }

    #[tokio::test]
    async fn lists_seed_catalog_in_order() {
        let store = seeded_store(Arc::new(MemoryKeyValueStore::new())).await;
        assert_eq!(store.list_routes(), sample_routes());
        assert!(store.current_route().is_none());
        assert!(store.current_waypoint().is_none());
    }

    #[tokio::test]
    async fn unlock_and_complete_touch_only_the_target() {
        let store = seeded_store(Arc::new(MemoryKeyValueStore::new())).await;
        let route2 = RouteId::new("route2");

        store.unlock_route(&route2).await.expect("persist");
        store.complete_route(&route2).await.expect("persist");

        let routes = store.list_routes();
        let seed = sample_routes();
        assert!(routes[1].unlocked && routes[1].completed);
        assert_eq!(routes[0], seed[0]);
        assert_eq!(routes[2], seed[2]);
    }

    #[tokio::test]
    async fn unknown_id_is_a_noop_without_write() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let store = seeded_store(storage.clone()).await;
        let missing = RouteId::new("route99");

        store.unlock_route(&missing).await.expect("skipped");
        store.complete_route(&missing).await.expect("skipped");

        assert_eq!(store.list_routes(), sample_routes());
        assert!(storage.is_empty().await);
    }

    #[tokio::test]
    async fn unlock_is_idempotent() {
        let store = seeded_store(Arc::new(MemoryKeyValueStore::new())).await;
        let route3 = RouteId::new("route3");

        store.unlock_route(&route3).detach();
        let once = store.snapshot();
        store.unlock_route(&route3).await.expect("persist");

        assert_eq!(store.snapshot(), once);
    }

    #[tokio::test]
    async fn current_slots_hold_only_latest_selection() {
        let store = seeded_store(Arc::new(MemoryKeyValueStore::new())).await;
        let routes = store.list_routes();

        store.set_current_route(routes[0].clone()).detach();
        store.set_current_route(routes[2].clone()).detach();
        store
            .set_current_waypoint(routes[2].waypoints[0].clone())
            .await
            .expect("persist");

        assert_eq!(store.current_route(), Some(routes[2].clone()));
        assert_eq!(
            store.current_waypoint().map(|w| w.id),
            Some(routes[2].waypoints[0].id.clone())
        );
    }

    #[tokio::test]
    async fn persisted_record_wins_over_seed_on_restart() {
        let storage = Arc::new(MemoryKeyValueStore::new());
        let store = seeded_store(storage.clone()).await;
        let route2 = RouteId::new("route2");
        store.unlock_route(&route2).detach();
        store
            .set_current_route(store.route(&route2).expect("route2"))
            .await
            .expect("persist");
        let saved = store.snapshot();
        drop(store);

        let reopened = seeded_store(storage).await;
        assert_eq!(reopened.snapshot(), saved);
        assert!(reopened.route(&route2).expect("route2").unlocked);
    }

    #[tokio::test]
    async fn open_surfaces_read_failure_and_open_or_default_seeds() {
        let failing = || {
            let mut storage = MockKeyValueStore::new();
            storage
                .expect_get()
                .returning(|key| Err(StorageError::backend("get", key, "offline")));
            Arc::new(storage)
        };

        let err = FlightStore::open(failing(), sample_routes())
            .await
            .err()
            .expect("open fails");
        assert!(err.is_storage());

        let store = FlightStore::open_or_default(failing(), sample_routes()).await;
        assert_eq!(store.list_routes(), sample_routes());
    }
}

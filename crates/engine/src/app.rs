//! Application state and composition.

use std::sync::Arc;

use crate::catalog::{sample_missions, sample_routes};
use crate::config::AppConfig;
use crate::infrastructure::clock::SystemClock;
use crate::infrastructure::ports::{ClockPort, KeyValueStore, StorageError};
use crate::stores::{AcademyTracker, FlightStore, MissionStore, UserStore};
use crate::use_cases::{AcademyFlow, FlightSimulation};

/// Main application state.
///
/// Holds the stores and the use cases built on them. Stores are shared
/// handles; each use case holds the stores it needs.
pub struct App {
    pub stores: Stores,
    pub use_cases: UseCases,
}

/// Container for all persisted stores.
pub struct Stores {
    pub user: Arc<UserStore>,
    pub flight: Arc<FlightStore>,
    pub mission: Arc<MissionStore>,
    pub academy: Arc<AcademyTracker>,
}

/// Container for all use cases.
pub struct UseCases {
    pub academy: AcademyFlow,
    pub flight: FlightSimulation,
}

impl App {
    /// Open every store against `storage` and wire up the use cases.
    ///
    /// Stores that cannot be hydrated start from their defaults.
    pub async fn bootstrap(
        config: &AppConfig,
        storage: Arc<dyn KeyValueStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        let user = Arc::new(UserStore::open_or_default(storage.clone(), clock.clone()).await);
        let flight = Arc::new(FlightStore::open_or_default(storage.clone(), sample_routes()).await);
        let mission =
            Arc::new(MissionStore::open_or_default(storage.clone(), sample_missions()).await);
        let academy = Arc::new(AcademyTracker::open_or_default(storage).await);

        tracing::info!(
            has_profile = user.get().is_some(),
            routes = flight.list_routes().len(),
            missions = mission.list_missions().len(),
            academy_screen = ?academy.current_screen(),
            "Stores hydrated"
        );

        let use_cases = UseCases {
            academy: AcademyFlow::new(academy.clone(), user.clone(), clock),
            flight: FlightSimulation::new(flight.clone(), config.flight_duration),
        };

        Self {
            stores: Stores {
                user,
                flight,
                mission,
                academy,
            },
            use_cases,
        }
    }

    /// Bootstrap with the configured backend and the system clock.
    ///
    /// Fails only when the storage backend itself cannot be opened.
    pub async fn from_config(config: &AppConfig) -> Result<Self, StorageError> {
        let storage = config.build_storage().await?;
        Ok(Self::bootstrap(config, storage, Arc::new(SystemClock::new())).await)
    }
}

//! Simulated flights along a route.
//!
//! Starting a flight records the route as the current one, then waits out
//! the configured flight time. Arrival is reported but does not mark the
//! route completed.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use worldexplorer_domain::{Location, RouteId};

use crate::infrastructure::ports::StoreError;
use crate::stores::FlightStore;

#[derive(Debug, thiserror::Error)]
pub enum FlightError {
    #[error("Route not found: {0}")]
    RouteNotFound(RouteId),
    #[error("Route is locked: {0}")]
    RouteLocked(RouteId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, PartialEq)]
pub enum FlightOutcome {
    Arrived {
        route_id: RouteId,
        destination: Location,
    },
    Cancelled {
        route_id: RouteId,
    },
}

pub struct FlightSimulation {
    flights: Arc<FlightStore>,
    duration: Duration,
}

impl FlightSimulation {
    pub fn new(flights: Arc<FlightStore>, duration: Duration) -> Self {
        Self { flights, duration }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Fly `route_id` until arrival or until `cancel` fires.
    ///
    /// The current-route slot is written before take-off and is left in
    /// place when the flight is cancelled.
    pub async fn fly(
        &self,
        route_id: &RouteId,
        cancel: CancellationToken,
    ) -> Result<FlightOutcome, FlightError> {
        let route = self
            .flights
            .route(route_id)
            .ok_or_else(|| FlightError::RouteNotFound(route_id.clone()))?;
        if !route.unlocked {
            return Err(FlightError::RouteLocked(route_id.clone()));
        }

        let destination = route.end_location.clone();
        self.flights.set_current_route(route).await?;

        tracing::info!(
            route_id = %route_id,
            destination = %destination.name,
            duration_secs = self.duration.as_secs_f64(),
            "Flight departed"
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!(route_id = %route_id, "Flight cancelled");
                Ok(FlightOutcome::Cancelled { route_id: route_id.clone() })
            }
            _ = tokio::time::sleep(self.duration) => {
                tracing::info!(route_id = %route_id, destination = %destination.name, "Flight arrived");
                Ok(FlightOutcome::Arrived { route_id: route_id.clone(), destination })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_routes;
    use crate::infrastructure::storage::MemoryKeyValueStore;

    async fn simulation(duration: Duration) -> (FlightSimulation, Arc<FlightStore>) {
        let flights = Arc::new(
            FlightStore::open(Arc::new(MemoryKeyValueStore::new()), sample_routes())
                .await
                .expect("open"),
        );
        (FlightSimulation::new(flights.clone(), duration), flights)
    }

    #[tokio::test]
    async fn arrives_at_route_destination() {
        let (sim, flights) = simulation(Duration::from_millis(10)).await;
        let route1 = RouteId::new("route1");

        let outcome = sim
            .fly(&route1, CancellationToken::new())
            .await
            .expect("flight");

        let expected = flights.route(&route1).expect("route1");
        assert_eq!(
            outcome,
            FlightOutcome::Arrived {
                route_id: route1.clone(),
                destination: expected.end_location.clone(),
            }
        );
        assert_eq!(flights.current_route().map(|r| r.id), Some(route1));
        assert!(!expected.completed);
    }

    #[tokio::test]
    async fn cancelled_flight_keeps_current_route() {
        let (sim, flights) = simulation(Duration::from_secs(3600)).await;
        let route1 = RouteId::new("route1");
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = sim.fly(&route1, cancel).await.expect("flight");

        assert_eq!(
            outcome,
            FlightOutcome::Cancelled {
                route_id: route1.clone()
            }
        );
        assert_eq!(flights.current_route().map(|r| r.id), Some(route1));
    }

    #[tokio::test]
    async fn cancel_mid_flight() {
        let (sim, _flights) = simulation(Duration::from_secs(3600)).await;
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(20)).await;
            trigger.cancel();
        });

        let outcome = sim
            .fly(&RouteId::new("route1"), cancel)
            .await
            .expect("flight");
        assert!(matches!(outcome, FlightOutcome::Cancelled { .. }));
    }

    #[tokio::test]
    async fn locked_or_unknown_routes_do_not_take_off() {
        let (sim, flights) = simulation(Duration::from_millis(10)).await;

        let locked = sim
            .fly(&RouteId::new("route3"), CancellationToken::new())
            .await
            .expect_err("route3 is locked");
        assert!(matches!(locked, FlightError::RouteLocked(_)));

        let missing = sim
            .fly(&RouteId::new("route42"), CancellationToken::new())
            .await
            .expect_err("no such route");
        assert!(matches!(missing, FlightError::RouteNotFound(_)));

        assert!(flights.current_route().is_none());
    }
}

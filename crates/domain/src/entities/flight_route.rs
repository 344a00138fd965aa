//! Flight route entity - a journey between two locations
//!
//! Routes come from the seed catalog. At runtime only the `unlocked` and
//! `completed` flags change.

use serde::{Deserialize, Serialize};

use crate::{Difficulty, Location, Mission, RouteId, WaypointId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightRoute {
    pub id: RouteId,
    pub name: String,
    pub description: String,
    pub start_location: Location,
    pub end_location: Location,
    /// Stops in flight order
    pub waypoints: Vec<Waypoint>,
    /// Kilometres
    pub distance: u32,
    /// Minutes
    pub estimated_duration: u32,
    pub difficulty: Difficulty,
    pub unlocked: bool,
    pub completed: bool,
}

impl FlightRoute {
    pub fn waypoint(&self, id: &WaypointId) -> Option<&Waypoint> {
        self.waypoints.iter().find(|w| &w.id == id)
    }

    /// Copy with `unlocked` set.
    pub fn unlocked(&self) -> Self {
        Self {
            unlocked: true,
            ..self.clone()
        }
    }

    /// Copy with `completed` set.
    pub fn completed(&self) -> Self {
        Self {
            completed: true,
            ..self.clone()
        }
    }
}

/// An intermediate stop on a route
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waypoint {
    pub id: WaypointId,
    pub location: Location,
    pub order: u32,
    pub missions: Vec<Mission>,
    pub unlocked: bool,
    pub completed: bool,
}

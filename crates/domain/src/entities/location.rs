//! Location entity - a place on the world map
//!
//! Locations are embedded by value in routes, waypoints, missions and
//! passport stamps; there is no separate location table.

use serde::{Deserialize, Serialize};

use crate::LocationId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub country: String,
    pub continent: String,
    pub coordinates: Coordinates,
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub image_url: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    /// IANA zone name, e.g. `Europe/Paris`
    pub timezone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationType {
    City,
    Landmark,
    NaturalWonder,
}

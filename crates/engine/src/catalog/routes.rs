use worldexplorer_domain::{Difficulty, FlightRoute, Location, RouteId, Waypoint, WaypointId};

use super::locations;

fn stop(id: &str, location: Location) -> Waypoint {
    Waypoint {
        id: WaypointId::new(id),
        location,
        order: 1,
        missions: Vec::new(),
        unlocked: true,
        completed: false,
    }
}

/// The three starter routes. Only the European route begins unlocked.
pub fn sample_routes() -> Vec<FlightRoute> {
    vec![
        FlightRoute {
            id: RouteId::new("route1"),
            name: "European Adventure".to_string(),
            description: "Explore the beautiful cities of Europe".to_string(),
            start_location: locations::paris(),
            end_location: locations::rome(),
            waypoints: vec![stop("waypoint1", locations::london())],
            distance: 1500,
            estimated_duration: 120,
            difficulty: Difficulty::Easy,
            unlocked: true,
            completed: false,
        },
        FlightRoute {
            id: RouteId::new("route2"),
            name: "Asian Discovery".to_string(),
            description: "Journey through ancient Asian cultures".to_string(),
            start_location: locations::tokyo(),
            end_location: locations::beijing(),
            waypoints: vec![stop("waypoint2", locations::seoul())],
            distance: 2000,
            estimated_duration: 180,
            difficulty: Difficulty::Medium,
            unlocked: false,
            completed: false,
        },
        FlightRoute {
            id: RouteId::new("route3"),
            name: "American Journey".to_string(),
            description: "Cross the vast American continent".to_string(),
            start_location: locations::new_york(),
            end_location: locations::los_angeles(),
            waypoints: vec![stop("waypoint3", locations::chicago())],
            distance: 2800,
            estimated_duration: 240,
            difficulty: Difficulty::Hard,
            unlocked: false,
            completed: false,
        },
    ]
}

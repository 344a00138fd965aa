use worldexplorer_domain::{Coordinates, Location, LocationId, LocationType};

#[allow(clippy::too_many_arguments)]
fn city(
    id: &str,
    name: &str,
    country: &str,
    continent: &str,
    (latitude, longitude): (f64, f64),
    description: &str,
    population: u64,
    timezone: &str,
) -> Location {
    Location {
        id: LocationId::new(id),
        name: name.to_string(),
        country: country.to_string(),
        continent: continent.to_string(),
        coordinates: Coordinates::new(latitude, longitude),
        location_type: LocationType::City,
        image_url: format!("{}.jpg", id),
        description: description.to_string(),
        population: Some(population),
        timezone: timezone.to_string(),
    }
}

pub(super) fn paris() -> Location {
    city("paris", "Paris", "France", "Europe", (48.8566, 2.3522), "The City of Light", 2_161_000, "Europe/Paris")
}

pub(super) fn rome() -> Location {
    city("rome", "Rome", "Italy", "Europe", (41.9028, 12.4964), "The Eternal City", 2_873_000, "Europe/Rome")
}

pub(super) fn london() -> Location {
    city("london", "London", "United Kingdom", "Europe", (51.5074, -0.1278), "The British capital", 8_982_000, "Europe/London")
}

pub(super) fn tokyo() -> Location {
    city("tokyo", "Tokyo", "Japan", "Asia", (35.6762, 139.6503), "The bustling capital of Japan", 13_960_000, "Asia/Tokyo")
}

pub(super) fn beijing() -> Location {
    city("beijing", "Beijing", "China", "Asia", (39.9042, 116.4074), "The ancient capital of China", 21_540_000, "Asia/Shanghai")
}

pub(super) fn seoul() -> Location {
    city("seoul", "Seoul", "South Korea", "Asia", (37.5665, 126.9780), "The dynamic capital of South Korea", 9_733_509, "Asia/Seoul")
}

pub(super) fn new_york() -> Location {
    city("newyork", "New York", "United States", "North America", (40.7128, -74.0060), "The Big Apple", 8_336_817, "America/New_York")
}

pub(super) fn los_angeles() -> Location {
    city("losangeles", "Los Angeles", "United States", "North America", (34.0522, -118.2437), "The City of Angels", 3_979_576, "America/Los_Angeles")
}

pub(super) fn chicago() -> Location {
    city("chicago", "Chicago", "United States", "North America", (41.8781, -87.6298), "The Windy City", 2_693_976, "America/Chicago")
}

/// Paris as seen from the Eiffel Tower mission: a landmark, no population.
pub(super) fn eiffel_tower() -> Location {
    Location {
        location_type: LocationType::Landmark,
        image_url: "eiffel-tower.jpg".to_string(),
        description: "The iconic symbol of Paris".to_string(),
        population: None,
        ..paris()
    }
}

/// Tokyo as referenced by missions (no population figure).
pub(super) fn tokyo_mission() -> Location {
    Location {
        population: None,
        ..tokyo()
    }
}

use std::fmt;

use serde::{Deserialize, Serialize};

/// String-keyed identifiers.
///
/// Catalog entries carry hand-authored ids (`"route1"`, `"paris"`,
/// `"magic_carpet"`), so IDs wrap a `String` rather than a UUID and
/// serialize transparently as plain JSON strings.
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Explorer profile IDs
define_id!(UserId);
define_id!(AvatarId);
define_id!(PassportId);
define_id!(StampId);
define_id!(AchievementId);

// Cosmetics and equipment IDs
define_id!(ItemId);
define_id!(ToolId);
define_id!(VehicleId);

// Travel IDs
define_id!(LocationId);
define_id!(RouteId);
define_id!(WaypointId);

// Mission IDs
define_id!(MissionId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = RouteId::new("route1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"route1\"");

        let back: RouteId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn display_matches_inner_value() {
        assert_eq!(MissionId::from("mission2").to_string(), "mission2");
    }
}

//! Domain entities persisted by the engine stores.

mod achievement;
mod avatar;
mod flight_route;
mod location;
mod mission;
mod passport;
mod user;

pub use achievement::{Achievement, AchievementCategory};
pub use avatar::{
    Avatar, AvatarItem, ExplorerTool, ItemCategory, ToolType, TravelVehicle, VehicleType,
};
pub use flight_route::{FlightRoute, Waypoint};
pub use location::{Coordinates, Location, LocationType};
pub use mission::{
    Mission, MissionCategory, MissionRequirement, MissionType, RequirementType, Reward,
    RewardType, MISSION_COMPLETE_PROGRESS,
};
pub use passport::{Passport, PassportStamp, StampType};
pub use user::{User, UserPatch, DEFAULT_EXPLORER_NAME, XP_PER_LEVEL};

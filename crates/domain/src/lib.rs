//! World Explorer domain types.
//!
//! Explorer profile, travel and mission catalog entities, plus the small
//! state machines that drive onboarding. Nothing here performs I/O; the
//! engine crate owns persistence.

extern crate self as worldexplorer_domain;

pub mod academy;
pub mod character_draft;
pub mod entities;
pub mod error;
pub mod ids;
pub mod oath;
pub mod value_objects;

pub use academy::{AcademyProgress, AcademyScreen, AcademyStage, AcademyStep};
pub use character_draft::{CharacterDraft, MAX_TOOLS};
pub use entities::{
    Achievement, AchievementCategory, Avatar, AvatarItem, Coordinates, ExplorerTool,
    FlightRoute, ItemCategory, Location, LocationType, Mission, MissionCategory,
    MissionRequirement, MissionType, Passport, PassportStamp, RequirementType, Reward,
    RewardType, StampType, ToolType, TravelVehicle, User, UserPatch, VehicleType, Waypoint,
    DEFAULT_EXPLORER_NAME, MISSION_COMPLETE_PROGRESS, XP_PER_LEVEL,
};
pub use error::DomainError;
pub use oath::{OathCeremony, OathStatus, OATH_PLEDGES};
pub use value_objects::{
    AccessibilitySettings, ArSettings, AudioSettings, ContentFilterLevel, Difficulty, FontSize,
    ParentalSettings, QualityLevel, ScalarValue, UserSettings, VisualSettings,
};

// Re-export ID types
pub use ids::{
    AchievementId, AvatarId, ItemId, LocationId, MissionId, PassportId, RouteId, StampId,
    ToolId, UserId, VehicleId, WaypointId,
};

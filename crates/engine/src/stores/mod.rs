//! Persisted state stores.
//!
//! Each store caches one record in memory and writes it through to
//! key-value storage on every mutation:
//! - `UserStore` - explorer profile (`user-storage`)
//! - `FlightStore` - route catalog and current selection (`flight-storage`)
//! - `MissionStore` - mission catalog and progress (`mission-storage`)
//! - `AcademyTracker` - onboarding flags (`academy_progress`)
//!
//! Stores are constructed once by [`crate::app::App`] and shared as `Arc`
//! handles. Reads are synchronous; mutations return a
//! [`PendingWrite`](crate::infrastructure::persistence::PendingWrite).

pub mod academy;
pub mod flight;
pub mod mission;
mod state;
pub mod user;

// Re-export store types
pub use academy::{AcademyTracker, ACADEMY_PROGRESS_KEY};
pub use flight::{FlightRecord, FlightStore, FLIGHT_STORAGE_KEY};
pub use mission::{CategoryFilter, MissionRecord, MissionStats, MissionStore, MISSION_STORAGE_KEY};
pub use user::{UserStore, USER_STORAGE_KEY};

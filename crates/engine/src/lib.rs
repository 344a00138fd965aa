//! World Explorer engine library.
//!
//! Persisted game state for the World Explorer app.
//!
//! ## Structure
//!
//! - `stores/` - User, flight route, mission and academy stores
//! - `use_cases/` - Flows that span stores (academy, flight simulation)
//! - `catalog/` - Seed content shipped with the app
//! - `infrastructure/` - Ports, storage adapters, write-behind persistence
//! - `app` - Application composition

pub mod app;
pub mod catalog;
pub mod config;
pub mod infrastructure;
pub mod stores;
pub mod use_cases;

pub use app::App;
pub use config::AppConfig;

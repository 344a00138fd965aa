//! Seed catalogs.
//!
//! Static sample content the stores start from when nothing has been
//! persisted yet. Order is significant: stores list entries in seed order.

mod avatar_options;
mod locations;
mod missions;
mod routes;

pub use avatar_options::{avatar_options, AvatarOptions};
pub use missions::sample_missions;
pub use routes::sample_routes;

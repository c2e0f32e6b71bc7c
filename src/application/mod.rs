//! Application layer: use-case services over the domain repositories
//!
//! - `records`: validated CRUD for users, clients, hotels, rooms and roles
//! - `identity`: staff approval and login
//! - `occupancy`: the check-in/check-out workflow

pub mod identity;
pub mod occupancy;
pub mod records;

pub use identity::{AccountService, AuthResult};
pub use occupancy::OccupancyService;
pub use records::RecordService;

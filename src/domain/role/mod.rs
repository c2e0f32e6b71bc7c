//! Role aggregate

pub mod model;

pub use model::{NewRole, Role, RoleChanges};

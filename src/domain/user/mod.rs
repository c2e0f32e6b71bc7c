//! User aggregate (hotel staff)
//!
//! Contains the User entity, change-sets, and the account repository.

pub mod model;
pub mod repository;

mod dto_create;
mod dto_update;

pub use model::User;

pub use dto_create::NewUser;
pub use dto_update::UserChanges;

pub use repository::UserAccountRepository;

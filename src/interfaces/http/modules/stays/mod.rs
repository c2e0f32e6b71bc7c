//! Stays module: the check-in / check-out workflow and its records

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

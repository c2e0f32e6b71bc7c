//! Users module: staff account CRUD and approval

pub mod dto;
pub mod handlers;

pub use dto::*;
pub use handlers::*;

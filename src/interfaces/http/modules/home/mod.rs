//! Home module: service info and health check

pub mod handlers;

pub use handlers::*;

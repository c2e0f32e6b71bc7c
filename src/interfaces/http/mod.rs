//! HTTP REST API
//!
//! - `common`: response envelope, pagination, error mapping, validated JSON
//! - `modules`: per-resource DTOs and handlers
//! - `router`: shared state, routes and Swagger documentation

pub mod common;
pub mod modules;
pub mod router;

pub use router::{create_api_router, ApiDoc, AppState};

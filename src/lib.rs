//! # Roomee
//!
//! Hotel front-desk backend: staff accounts, guests, hotels, rooms, and the
//! check-in / check-out workflow that moves a room between vacant and
//! occupied.
//!
//! ## Architecture
//!
//! - **domain**: entities, change-sets and repository traits
//! - **application**: validated CRUD, login/approval and the occupancy workflow
//! - **infrastructure**: SeaORM entities, migrations and repositories
//! - **interfaces**: REST API with Swagger documentation
//! - **auth**: password hashing and JWT issuing
//! - **shared**: errors, pagination, retry and shutdown plumbing

pub mod application;
pub mod auth;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

pub use infrastructure::{init_database, DatabaseConfig, SeaOrmRepositoryProvider};

pub use interfaces::http::{create_api_router, AppState};

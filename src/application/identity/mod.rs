//! Identity module: staff approval and login
//!
//! Contains the `AccountService`, which checks credentials against the
//! stored bcrypt hash and issues signed tokens for approved staff.

pub mod service;

pub use service::{AccountService, AuthResult};

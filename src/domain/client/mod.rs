//! Client aggregate (hotel guests)

pub mod model;

pub use model::{Client, ClientChanges, NewClient};

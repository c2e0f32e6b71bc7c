//! Room occupancy workflow

pub mod service;

pub use service::OccupancyService;

//! Room aggregate

pub mod model;

pub use model::{NewRoom, Occupancy, Room, RoomChanges};

//! Hotel aggregate

pub mod model;

pub use model::{Hotel, HotelChanges, NewHotel};

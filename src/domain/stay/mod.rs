//! Stay aggregate: check-ins and the check-outs that close them
//!
//! A room goes Vacant -> Occupied on check-in and back to Vacant on the
//! check-out of that check-in. Both transitions are single storage
//! transactions implemented behind `StayRepository`.

pub mod model;
pub mod repository;

pub use model::{CheckIn, CheckInFilter, CheckInRequest, CheckOut, CheckOutRequest};
pub use repository::StayRepository;

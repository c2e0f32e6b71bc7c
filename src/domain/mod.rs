//! Domain layer: entities, change-sets and repository interfaces

pub mod client;
pub mod hotel;
pub mod repositories;
pub mod role;
pub mod room;
pub mod stay;
pub mod user;

pub use client::{Client, ClientChanges, NewClient};
pub use hotel::{Hotel, HotelChanges, NewHotel};
pub use repositories::{DomainResult, Record, Repository, RepositoryProvider};
pub use role::{NewRole, Role, RoleChanges};
pub use room::{NewRoom, Occupancy, Room, RoomChanges};
pub use stay::{
    CheckIn, CheckInFilter, CheckInRequest, CheckOut, CheckOutRequest, StayRepository,
};
pub use user::{NewUser, User, UserAccountRepository, UserChanges};

pub use crate::shared::DomainError;

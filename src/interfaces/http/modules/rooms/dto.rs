use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewRoom, Room, RoomChanges};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub location: Option<String>,
    pub amenities: Vec<String>,
    pub pictures: Vec<String>,
    pub price: f64,
    pub occupied: bool,
    /// "vacant" or "occupied"
    pub occupancy: String,
    pub last_update: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<Room> for RoomDto {
    fn from(r: Room) -> Self {
        let occupancy = r.occupancy().to_string();
        Self {
            id: r.id,
            hotel_id: r.hotel_id,
            name: r.name,
            location: r.location,
            amenities: r.amenities,
            pictures: r.pictures,
            price: r.price,
            occupied: r.occupied,
            occupancy,
            last_update: r.last_update,
            created_at: r.created_at,
        }
    }
}

/// New rooms always start vacant.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoomRequest {
    pub hotel_id: i32,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: String,
    pub location: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub pictures: Vec<String>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: f64,
}

impl From<CreateRoomRequest> for NewRoom {
    fn from(r: CreateRoomRequest) -> Self {
        Self {
            hotel_id: r.hotel_id,
            name: r.name,
            location: r.location,
            amenities: r.amenities,
            pictures: r.pictures,
            price: r.price,
        }
    }
}

/// Occupancy is not writable here; it only changes through check-in and
/// check-out.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRoomRequest {
    pub hotel_id: Option<i32>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: Option<String>,
    pub location: Option<String>,
    pub amenities: Option<Vec<String>>,
    pub pictures: Option<Vec<String>>,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub price: Option<f64>,
}

impl From<UpdateRoomRequest> for RoomChanges {
    fn from(r: UpdateRoomRequest) -> Self {
        Self {
            hotel_id: r.hotel_id,
            name: r.name,
            location: r.location,
            amenities: r.amenities,
            pictures: r.pictures,
            price: r.price,
        }
    }
}

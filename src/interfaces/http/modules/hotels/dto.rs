use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Hotel, HotelChanges, NewHotel};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HotelDto {
    pub id: i32,
    pub name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub room_prefixes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Hotel> for HotelDto {
    fn from(h: Hotel) -> Self {
        Self {
            id: h.id,
            name: h.name,
            phone_num: h.phone_num,
            address: h.address,
            email: h.email,
            website: h.website,
            room_prefixes: h.room_prefixes,
            created_at: h.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateHotelRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website: Option<String>,
    #[serde(default)]
    pub room_prefixes: Vec<String>,
}

impl From<CreateHotelRequest> for NewHotel {
    fn from(r: CreateHotelRequest) -> Self {
        Self {
            name: r.name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            website: r.website,
            room_prefixes: r.room_prefixes,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateHotelRequest {
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub name: Option<String>,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website: Option<String>,
    /// Replaces the whole list when present
    pub room_prefixes: Option<Vec<String>>,
}

impl From<UpdateHotelRequest> for HotelChanges {
    fn from(r: UpdateHotelRequest) -> Self {
        Self {
            name: r.name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            website: r.website,
            room_prefixes: r.room_prefixes,
        }
    }
}

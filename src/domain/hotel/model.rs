use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::repositories::{Record, Repository, RepositoryProvider};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    /// Prefixes used when naming rooms (e.g. "A", "B-")
    pub room_prefixes: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewHotel {
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub name: String,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website: Option<String>,
    #[validate(length(max = 64))]
    pub room_prefixes: Vec<String>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct HotelChanges {
    #[validate(length(min = 1, max = 128, message = "must be 1-128 characters"))]
    pub name: Option<String>,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(url(message = "must be a valid URL"))]
    pub website: Option<String>,
    #[validate(length(max = 64))]
    pub room_prefixes: Option<Vec<String>>,
}

impl Record for Hotel {
    const ENTITY: &'static str = "Hotel";

    type Draft = NewHotel;
    type Changes = HotelChanges;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self> {
        repos.hotels()
    }
}

//! User DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewUser, User, UserChanges};
use crate::interfaces::http::common::nullable;

/// Staff user as returned by the API. The password hash never leaves the
/// server.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: String,
    pub hotel_id: Option<i32>,
    pub role_id: Option<i32>,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            phone_num: u.phone_num,
            address: u.address,
            email: u.email,
            hotel_id: u.hotel_id,
            role_id: u.role_id,
            approved: u.approved,
            approved_at: u.approved_at,
            created_at: u.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: String,
    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: String,
    pub hotel_id: Option<i32>,
    pub role_id: Option<i32>,
}

impl From<CreateUserRequest> for NewUser {
    fn from(r: CreateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            password: r.password,
            hotel_id: r.hotel_id,
            role_id: r.role_id,
        }
    }
}

/// Partial update. Omitted fields are left unchanged; `password` is
/// re-hashed when present.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: Option<String>,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128, message = "must be 8-128 characters"))]
    pub password: Option<String>,
    /// `null` detaches the user from its hotel
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub hotel_id: Option<Option<i32>>,
    /// `null` clears the role
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<i32>)]
    pub role_id: Option<Option<i32>>,
}

impl From<UpdateUserRequest> for UserChanges {
    fn from(r: UpdateUserRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            password: r.password,
            hotel_id: r.hotel_id,
            role_id: r.role_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_reference_differs_from_absent() {
        let absent: UpdateUserRequest = serde_json::from_str(r#"{"first_name": "Noor"}"#).unwrap();
        assert_eq!(absent.hotel_id, None);
        assert_eq!(absent.role_id, None);

        let cleared: UpdateUserRequest =
            serde_json::from_str(r#"{"hotel_id": null, "role_id": 3}"#).unwrap();
        assert_eq!(cleared.hotel_id, Some(None));
        assert_eq!(cleared.role_id, Some(Some(3)));

        let changes = UserChanges::from(cleared);
        assert_eq!(changes.hotel_id, Some(None));
    }
}

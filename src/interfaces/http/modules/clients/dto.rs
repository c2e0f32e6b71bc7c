use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{Client, ClientChanges, NewClient};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClientDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    /// Identity document type, e.g. "passport"
    pub identity_type: Option<String>,
    pub identity_num: Option<String>,
    /// Reference to a scan of the identity document
    pub identity_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Client> for ClientDto {
    fn from(c: Client) -> Self {
        Self {
            id: c.id,
            first_name: c.first_name,
            last_name: c.last_name,
            phone_num: c.phone_num,
            address: c.address,
            email: c.email,
            identity_type: c.identity_type,
            identity_num: c.identity_num,
            identity_pic: c.identity_pic,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub identity_type: Option<String>,
    pub identity_num: Option<String>,
    pub identity_pic: Option<String>,
}

impl From<CreateClientRequest> for NewClient {
    fn from(r: CreateClientRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            identity_type: r.identity_type,
            identity_num: r.identity_num,
            identity_pic: r.identity_pic,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateClientRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: Option<String>,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    pub identity_type: Option<String>,
    pub identity_num: Option<String>,
    pub identity_pic: Option<String>,
}

impl From<UpdateClientRequest> for ClientChanges {
    fn from(r: UpdateClientRequest) -> Self {
        Self {
            first_name: r.first_name,
            last_name: r.last_name,
            phone_num: r.phone_num,
            address: r.address,
            email: r.email,
            identity_type: r.identity_type,
            identity_num: r.identity_num,
            identity_pic: r.identity_pic,
        }
    }
}

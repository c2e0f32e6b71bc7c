use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::repositories::{Record, Repository, RepositoryProvider};

/// A guest. The identity document fields describe what the front desk saw
/// at registration (type, number, picture reference).
#[derive(Debug, Clone, PartialEq)]
pub struct Client {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: Option<String>,
    pub identity_type: Option<String>,
    pub identity_num: Option<String>,
    pub identity_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewClient {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: String,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 64))]
    pub identity_type: Option<String>,
    #[validate(length(max = 64))]
    pub identity_num: Option<String>,
    #[validate(length(max = 255))]
    pub identity_pic: Option<String>,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct ClientChanges {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub last_name: Option<String>,
    #[validate(length(max = 32))]
    pub phone_num: Option<String>,
    #[validate(length(max = 255))]
    pub address: Option<String>,
    #[validate(email(message = "must be a valid email address"))]
    pub email: Option<String>,
    #[validate(length(max = 64))]
    pub identity_type: Option<String>,
    #[validate(length(max = 64))]
    pub identity_num: Option<String>,
    #[validate(length(max = 255))]
    pub identity_pic: Option<String>,
}

impl Record for Client {
    const ENTITY: &'static str = "Client";

    type Draft = NewClient;
    type Changes = ClientChanges;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self> {
        repos.clients()
    }
}

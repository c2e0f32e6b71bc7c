use chrono::{DateTime, Utc};
use validator::Validate;

use crate::domain::repositories::{Record, Repository, RepositoryProvider};

/// A named staff role. Names are unique.
#[derive(Debug, Clone, PartialEq)]
pub struct Role {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Validate)]
pub struct NewRole {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: String,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct RoleChanges {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: Option<String>,
}

impl Record for Role {
    const ENTITY: &'static str = "Role";

    type Draft = NewRole;
    type Changes = RoleChanges;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self> {
        repos.roles()
    }
}

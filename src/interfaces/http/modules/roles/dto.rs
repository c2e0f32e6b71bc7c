use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::domain::{NewRole, Role, RoleChanges};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl From<Role> for RoleDto {
    fn from(r: Role) -> Self {
        Self {
            id: r.id,
            name: r.name,
            created_at: r.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRoleRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: String,
}

impl From<CreateRoleRequest> for NewRole {
    fn from(r: CreateRoleRequest) -> Self {
        Self { name: r.name }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateRoleRequest {
    #[validate(length(min = 1, max = 64, message = "must be 1-64 characters"))]
    pub name: Option<String>,
}

impl From<UpdateRoleRequest> for RoleChanges {
    fn from(r: UpdateRoleRequest) -> Self {
        Self { name: r.name }
    }
}

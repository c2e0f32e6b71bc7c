use axum::extract::{Path, Query, State};

use super::dto::{CreateRoleRequest, RoleDto, UpdateRoleRequest};
use crate::application::RecordService;
use crate::domain::Role;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/roles",
    tag = "Roles",
    params(PaginationParams),
    responses(
        (status = 200, description = "Role list", body = ApiResponse<PaginatedResponse<RoleDto>>)
    )
)]
pub async fn list_roles(
    State(roles): State<RecordService<Role>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<RoleDto>> {
    let page = roles
        .list(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role details", body = ApiResponse<RoleDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_role(
    State(roles): State<RecordService<Role>>,
    Path(id): Path<i32>,
) -> ApiResult<RoleDto> {
    let role = roles.get(id).await.map_err(failure)?;
    ok(role.into())
}

#[utoipa::path(
    post,
    path = "/roles",
    tag = "Roles",
    request_body = CreateRoleRequest,
    responses(
        (status = 201, description = "Role created", body = ApiResponse<RoleDto>),
        (status = 409, description = "Role name already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_role(
    State(roles): State<RecordService<Role>>,
    ValidatedJson(body): ValidatedJson<CreateRoleRequest>,
) -> ApiCreated<RoleDto> {
    let role = roles.create(body.into()).await.map_err(failure)?;
    created(role.into())
}

#[utoipa::path(
    put,
    path = "/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Role updated", body = ApiResponse<RoleDto>),
        (status = 404, description = "Not found"),
        (status = 409, description = "Role name already exists")
    )
)]
pub async fn update_role(
    State(roles): State<RecordService<Role>>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateRoleRequest>,
) -> ApiResult<RoleDto> {
    let role = roles.update(id, body.into()).await.map_err(failure)?;
    ok(role.into())
}

#[utoipa::path(
    delete,
    path = "/roles/{id}",
    tag = "Roles",
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role deleted; users holding it keep no role"),
        (status = 404, description = "Not found")
    )
)]
pub async fn delete_role(
    State(roles): State<RecordService<Role>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    roles.delete(id).await.map_err(failure)?;
    ok(())
}

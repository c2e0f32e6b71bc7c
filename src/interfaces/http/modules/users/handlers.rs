//! User management handlers
//!
//! CRUD delegates to `RecordService<User>`, approval to `AccountService`.

use axum::extract::{Path, Query, State};

use super::dto::{CreateUserRequest, UpdateUserRequest, UserDto};
use crate::application::{AccountService, RecordService};
use crate::domain::User;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    params(PaginationParams),
    responses(
        (status = 200, description = "User list", body = ApiResponse<PaginatedResponse<UserDto>>)
    )
)]
pub async fn list_users(
    State(users): State<RecordService<User>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<UserDto>> {
    let page = users
        .list(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_user(
    State(users): State<RecordService<User>>,
    Path(id): Path<i32>,
) -> ApiResult<UserDto> {
    let user = users.get(id).await.map_err(failure)?;
    ok(user.into())
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = ApiResponse<UserDto>),
        (status = 409, description = "Email already registered"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_user(
    State(users): State<RecordService<User>>,
    ValidatedJson(body): ValidatedJson<CreateUserRequest>,
) -> ApiCreated<UserDto> {
    let user = users.create(body.into()).await.map_err(failure)?;
    created(user.into())
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_user(
    State(users): State<RecordService<User>>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateUserRequest>,
) -> ApiResult<UserDto> {
    let user = users.update(id, body.into()).await.map_err(failure)?;
    ok(user.into())
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "User is referenced by check-ins or check-outs")
    )
)]
pub async fn delete_user(
    State(users): State<RecordService<User>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    users.delete(id).await.map_err(failure)?;
    ok(())
}

#[utoipa::path(
    post,
    path = "/users/{id}/approve",
    tag = "Users",
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User approved", body = ApiResponse<UserDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn approve_user(
    State(accounts): State<AccountService>,
    Path(id): Path<i32>,
) -> ApiResult<UserDto> {
    let user = accounts.approve(id).await.map_err(failure)?;
    ok(user.into())
}

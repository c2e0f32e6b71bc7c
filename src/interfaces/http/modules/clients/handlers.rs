use axum::extract::{Path, Query, State};

use super::dto::{ClientDto, CreateClientRequest, UpdateClientRequest};
use crate::application::RecordService;
use crate::domain::Client;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    params(PaginationParams),
    responses(
        (status = 200, description = "Client list", body = ApiResponse<PaginatedResponse<ClientDto>>)
    )
)]
pub async fn list_clients(
    State(clients): State<RecordService<Client>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<ClientDto>> {
    let page = clients
        .list(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client details", body = ApiResponse<ClientDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_client(
    State(clients): State<RecordService<Client>>,
    Path(id): Path<i32>,
) -> ApiResult<ClientDto> {
    let client = clients.get(id).await.map_err(failure)?;
    ok(client.into())
}

#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = CreateClientRequest,
    responses(
        (status = 201, description = "Client registered", body = ApiResponse<ClientDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_client(
    State(clients): State<RecordService<Client>>,
    ValidatedJson(body): ValidatedJson<CreateClientRequest>,
) -> ApiCreated<ClientDto> {
    let client = clients.create(body.into()).await.map_err(failure)?;
    created(client.into())
}

#[utoipa::path(
    put,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client ID")),
    request_body = UpdateClientRequest,
    responses(
        (status = 200, description = "Client updated", body = ApiResponse<ClientDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_client(
    State(clients): State<RecordService<Client>>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateClientRequest>,
) -> ApiResult<ClientDto> {
    let client = clients.update(id, body.into()).await.map_err(failure)?;
    ok(client.into())
}

#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client ID")),
    responses(
        (status = 200, description = "Client deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Client has check-in history")
    )
)]
pub async fn delete_client(
    State(clients): State<RecordService<Client>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    clients.delete(id).await.map_err(failure)?;
    ok(())
}

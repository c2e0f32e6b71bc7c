use axum::extract::{Path, Query, State};

use super::dto::{CreateRoomRequest, RoomDto, UpdateRoomRequest};
use crate::application::RecordService;
use crate::domain::Room;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/rooms",
    tag = "Rooms",
    params(PaginationParams),
    responses(
        (status = 200, description = "Room list", body = ApiResponse<PaginatedResponse<RoomDto>>)
    )
)]
pub async fn list_rooms(
    State(rooms): State<RecordService<Room>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<RoomDto>> {
    let page = rooms
        .list(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_room(
    State(rooms): State<RecordService<Room>>,
    Path(id): Path<i32>,
) -> ApiResult<RoomDto> {
    let room = rooms.get(id).await.map_err(failure)?;
    ok(room.into())
}

#[utoipa::path(
    post,
    path = "/rooms",
    tag = "Rooms",
    request_body = CreateRoomRequest,
    responses(
        (status = 201, description = "Room created (vacant)", body = ApiResponse<RoomDto>),
        (status = 409, description = "Hotel does not exist"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_room(
    State(rooms): State<RecordService<Room>>,
    ValidatedJson(body): ValidatedJson<CreateRoomRequest>,
) -> ApiCreated<RoomDto> {
    let room = rooms.create(body.into()).await.map_err(failure)?;
    created(room.into())
}

#[utoipa::path(
    put,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    request_body = UpdateRoomRequest,
    responses(
        (status = 200, description = "Room updated", body = ApiResponse<RoomDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_room(
    State(rooms): State<RecordService<Room>>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateRoomRequest>,
) -> ApiResult<RoomDto> {
    let room = rooms.update(id, body.into()).await.map_err(failure)?;
    ok(room.into())
}

#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "Rooms",
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Room is occupied or has check-in history")
    )
)]
pub async fn delete_room(
    State(rooms): State<RecordService<Room>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    rooms.delete(id).await.map_err(failure)?;
    ok(())
}

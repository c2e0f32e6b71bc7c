//! Check-in / check-out handlers
//!
//! Stays are created only through the workflow endpoints; there is no
//! generic update or delete for them.

use axum::extract::{Path, Query, State};

use super::dto::{
    CheckInDto, CheckOutDto, CreateCheckInRequest, CreateCheckOutRequest, ListCheckInsParams,
};
use crate::application::OccupancyService;
use crate::domain::CheckOutRequest;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/check-ins",
    tag = "Stays",
    params(ListCheckInsParams),
    responses(
        (status = 200, description = "Check-in list", body = ApiResponse<PaginatedResponse<CheckInDto>>)
    )
)]
pub async fn list_check_ins(
    State(occupancy): State<OccupancyService>,
    Query(params): Query<ListCheckInsParams>,
) -> ApiResult<PaginatedResponse<CheckInDto>> {
    let page = occupancy
        .list_check_ins(params.filter(), params.pagination().page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/check-ins/{id}",
    tag = "Stays",
    params(("id" = i32, Path, description = "Check-in ID")),
    responses(
        (status = 200, description = "Check-in details", body = ApiResponse<CheckInDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_check_in(
    State(occupancy): State<OccupancyService>,
    Path(id): Path<i32>,
) -> ApiResult<CheckInDto> {
    let stay = occupancy.get_check_in(id).await.map_err(failure)?;
    ok(stay.into())
}

#[utoipa::path(
    post,
    path = "/check-ins",
    tag = "Stays",
    request_body = CreateCheckInRequest,
    responses(
        (status = 201, description = "Client checked in; room is now occupied", body = ApiResponse<CheckInDto>),
        (status = 404, description = "Room, client or staff user not found"),
        (status = 409, description = "Room unavailable or client already checked in")
    )
)]
pub async fn check_in(
    State(occupancy): State<OccupancyService>,
    ValidatedJson(body): ValidatedJson<CreateCheckInRequest>,
) -> ApiCreated<CheckInDto> {
    let stay = occupancy.check_in(body.into()).await.map_err(failure)?;
    created(stay.into())
}

#[utoipa::path(
    post,
    path = "/check-ins/{id}/check-out",
    tag = "Stays",
    params(("id" = i32, Path, description = "Check-in ID")),
    request_body = CreateCheckOutRequest,
    responses(
        (status = 201, description = "Client checked out; room is vacant again", body = ApiResponse<CheckOutDto>),
        (status = 404, description = "Check-in or staff user not found"),
        (status = 409, description = "Already checked out")
    )
)]
pub async fn check_out(
    State(occupancy): State<OccupancyService>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<CreateCheckOutRequest>,
) -> ApiCreated<CheckOutDto> {
    let request = CheckOutRequest {
        check_in_id: id,
        staff_user_id: body.staff_user_id,
    };
    let check_out = occupancy.check_out(request).await.map_err(failure)?;
    created(check_out.into())
}

#[utoipa::path(
    get,
    path = "/check-outs",
    tag = "Stays",
    params(PaginationParams),
    responses(
        (status = 200, description = "Check-out list", body = ApiResponse<PaginatedResponse<CheckOutDto>>)
    )
)]
pub async fn list_check_outs(
    State(occupancy): State<OccupancyService>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<CheckOutDto>> {
    let page = occupancy
        .list_check_outs(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/check-outs/{id}",
    tag = "Stays",
    params(("id" = i32, Path, description = "Check-out ID")),
    responses(
        (status = 200, description = "Check-out details", body = ApiResponse<CheckOutDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_check_out(
    State(occupancy): State<OccupancyService>,
    Path(id): Path<i32>,
) -> ApiResult<CheckOutDto> {
    let check_out = occupancy.get_check_out(id).await.map_err(failure)?;
    ok(check_out.into())
}

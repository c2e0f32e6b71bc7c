use axum::extract::{Path, Query, State};

use super::dto::{CreateHotelRequest, HotelDto, UpdateHotelRequest};
use crate::application::RecordService;
use crate::domain::Hotel;
use crate::interfaces::http::common::{
    created, failure, ok, ApiCreated, ApiResponse, ApiResult, PaginatedResponse,
    PaginationParams, ValidatedJson,
};

#[utoipa::path(
    get,
    path = "/hotels",
    tag = "Hotels",
    params(PaginationParams),
    responses(
        (status = 200, description = "Hotel list", body = ApiResponse<PaginatedResponse<HotelDto>>)
    )
)]
pub async fn list_hotels(
    State(hotels): State<RecordService<Hotel>>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<PaginatedResponse<HotelDto>> {
    let page = hotels
        .list(params.page_request())
        .await
        .map_err(failure)?;
    ok(page.into())
}

#[utoipa::path(
    get,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel details", body = ApiResponse<HotelDto>),
        (status = 404, description = "Not found")
    )
)]
pub async fn get_hotel(
    State(hotels): State<RecordService<Hotel>>,
    Path(id): Path<i32>,
) -> ApiResult<HotelDto> {
    let hotel = hotels.get(id).await.map_err(failure)?;
    ok(hotel.into())
}

#[utoipa::path(
    post,
    path = "/hotels",
    tag = "Hotels",
    request_body = CreateHotelRequest,
    responses(
        (status = 201, description = "Hotel created", body = ApiResponse<HotelDto>),
        (status = 422, description = "Validation error")
    )
)]
pub async fn create_hotel(
    State(hotels): State<RecordService<Hotel>>,
    ValidatedJson(body): ValidatedJson<CreateHotelRequest>,
) -> ApiCreated<HotelDto> {
    let hotel = hotels.create(body.into()).await.map_err(failure)?;
    created(hotel.into())
}

#[utoipa::path(
    put,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = UpdateHotelRequest,
    responses(
        (status = 200, description = "Hotel updated", body = ApiResponse<HotelDto>),
        (status = 404, description = "Not found"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn update_hotel(
    State(hotels): State<RecordService<Hotel>>,
    Path(id): Path<i32>,
    ValidatedJson(body): ValidatedJson<UpdateHotelRequest>,
) -> ApiResult<HotelDto> {
    let hotel = hotels.update(id, body.into()).await.map_err(failure)?;
    ok(hotel.into())
}

#[utoipa::path(
    delete,
    path = "/hotels/{id}",
    tag = "Hotels",
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel and its rooms deleted"),
        (status = 404, description = "Not found"),
        (status = 409, description = "Hotel has check-in history")
    )
)]
pub async fn delete_hotel(
    State(hotels): State<RecordService<Hotel>>,
    Path(id): Path<i32>,
) -> ApiResult<()> {
    hotels.delete(id).await.map_err(failure)?;
    ok(())
}

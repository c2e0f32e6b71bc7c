use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::domain::{CheckIn, CheckInFilter, CheckInRequest, CheckOut};
use crate::interfaces::http::common::PaginationParams;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckInDto {
    pub id: i32,
    pub room_id: i32,
    pub checked_in_by: i32,
    pub client_id: i32,
    pub hotel_id: i32,
    /// False once a check-out references this check-in
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CheckIn> for CheckInDto {
    fn from(c: CheckIn) -> Self {
        Self {
            id: c.id,
            room_id: c.room_id,
            checked_in_by: c.checked_in_by,
            client_id: c.client_id,
            hotel_id: c.hotel_id,
            is_open: c.is_open,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CheckOutDto {
    pub id: i32,
    pub checked_out_by: i32,
    pub check_in_id: i32,
    pub created_at: DateTime<Utc>,
}

impl From<CheckOut> for CheckOutDto {
    fn from(c: CheckOut) -> Self {
        Self {
            id: c.id,
            checked_out_by: c.checked_out_by,
            check_in_id: c.check_in_id,
            created_at: c.created_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCheckInRequest {
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub room_id: i32,
    /// Staff user performing the check-in
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub staff_user_id: i32,
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub client_id: i32,
}

impl From<CreateCheckInRequest> for CheckInRequest {
    fn from(r: CreateCheckInRequest) -> Self {
        Self {
            room_id: r.room_id,
            staff_user_id: r.staff_user_id,
            client_id: r.client_id,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCheckOutRequest {
    /// Staff user performing the check-out
    #[validate(range(min = 1, message = "must be a valid id"))]
    pub staff_user_id: i32,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct ListCheckInsParams {
    /// `true` for open stays only, `false` for closed ones
    pub open: Option<bool>,
    pub room_id: Option<i32>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListCheckInsParams {
    pub fn filter(&self) -> CheckInFilter {
        CheckInFilter {
            open: self.open,
            room_id: self.room_id,
        }
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            page: self.page,
            limit: self.limit,
        }
    }
}

use chrono::{DateTime, Utc};

/// A client's occupancy of a room. Open until a `CheckOut` closes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckIn {
    pub id: i32,
    pub room_id: i32,
    /// Staff user who performed the check-in
    pub checked_in_by: i32,
    pub client_id: i32,
    /// Hotel of the room at check-in time
    pub hotel_id: i32,
    pub is_open: bool,
    pub created_at: DateTime<Utc>,
}

/// Terminal record of a check-in.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOut {
    pub id: i32,
    /// Staff user who performed the check-out
    pub checked_out_by: i32,
    pub check_in_id: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckInRequest {
    pub room_id: i32,
    pub staff_user_id: i32,
    pub client_id: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckOutRequest {
    pub check_in_id: i32,
    pub staff_user_id: i32,
}

/// Narrows a check-in listing. Empty filter lists everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckInFilter {
    pub open: Option<bool>,
    pub room_id: Option<i32>,
}

impl CheckInFilter {
    pub fn open() -> Self {
        Self {
            open: Some(true),
            room_id: None,
        }
    }
}

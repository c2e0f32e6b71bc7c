//! Stay repository interface

use async_trait::async_trait;

use super::model::{CheckIn, CheckInFilter, CheckInRequest, CheckOut, CheckOutRequest};
use crate::domain::DomainResult;
use crate::shared::{PageRequest, PaginatedResult};

#[async_trait]
pub trait StayRepository: Send + Sync {
    /// Creates an open check-in and marks the room occupied, atomically.
    ///
    /// Fails with `NotFound` for a missing room, staff user or client,
    /// `RoomUnavailable` if the room is occupied and
    /// `ClientAlreadyCheckedIn` if the client holds an open check-in.
    async fn check_in(&self, request: CheckInRequest) -> DomainResult<CheckIn>;

    /// Closes a check-in with a check-out row and frees its room, atomically.
    ///
    /// Fails with `NotFound` for a missing check-in or staff user and
    /// `AlreadyCheckedOut` if the check-in is already closed.
    async fn check_out(&self, request: CheckOutRequest) -> DomainResult<CheckOut>;

    async fn find_check_in(&self, id: i32) -> DomainResult<Option<CheckIn>>;
    async fn list_check_ins(
        &self,
        filter: CheckInFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<CheckIn>>;

    async fn find_check_out(&self, id: i32) -> DomainResult<Option<CheckOut>>;
    async fn list_check_outs(&self, page: PageRequest) -> DomainResult<PaginatedResult<CheckOut>>;
}

//! Check-in / check-out orchestration
//!
//! Preconditions and the room state transition are enforced atomically by
//! `StayRepository`; this service adds retry on transient storage failure
//! and logging.

use std::sync::Arc;

use tracing::info;

use crate::domain::{
    CheckIn, CheckInFilter, CheckInRequest, CheckOut, CheckOutRequest, DomainError, DomainResult,
    RepositoryProvider,
};
use crate::shared::{retry_with_backoff, PageRequest, PaginatedResult, RetryConfig};

#[derive(Clone)]
pub struct OccupancyService {
    repos: Arc<dyn RepositoryProvider>,
    retry: RetryConfig,
}

impl OccupancyService {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            retry: RetryConfig::once(),
        }
    }

    /// Vacant -> Occupied
    pub async fn check_in(&self, request: CheckInRequest) -> DomainResult<CheckIn> {
        let stay = retry_with_backoff(
            self.retry.clone(),
            || self.repos.stays().check_in(request),
            DomainError::is_transient,
            "check_in",
        )
        .await?;

        info!(
            check_in_id = stay.id,
            room_id = stay.room_id,
            client_id = stay.client_id,
            staff_user_id = stay.checked_in_by,
            "Client checked in"
        );
        Ok(stay)
    }

    /// Occupied -> Vacant
    pub async fn check_out(&self, request: CheckOutRequest) -> DomainResult<CheckOut> {
        let check_out = retry_with_backoff(
            self.retry.clone(),
            || self.repos.stays().check_out(request),
            DomainError::is_transient,
            "check_out",
        )
        .await?;

        info!(
            check_out_id = check_out.id,
            check_in_id = check_out.check_in_id,
            staff_user_id = check_out.checked_out_by,
            "Client checked out"
        );
        Ok(check_out)
    }

    pub async fn get_check_in(&self, id: i32) -> DomainResult<CheckIn> {
        self.repos
            .stays()
            .find_check_in(id)
            .await?
            .ok_or_else(|| DomainError::not_found("CheckIn", id))
    }

    pub async fn list_check_ins(
        &self,
        filter: CheckInFilter,
        page: PageRequest,
    ) -> DomainResult<PaginatedResult<CheckIn>> {
        self.repos.stays().list_check_ins(filter, page).await
    }

    pub async fn get_check_out(&self, id: i32) -> DomainResult<CheckOut> {
        self.repos
            .stays()
            .find_check_out(id)
            .await?
            .ok_or_else(|| DomainError::not_found("CheckOut", id))
    }

    pub async fn list_check_outs(&self, page: PageRequest) -> DomainResult<PaginatedResult<CheckOut>> {
        self.repos.stays().list_check_outs(page).await
    }
}

//! Shared HTTP types: response envelope, pagination and error mapping

mod validated_json;

pub use validated_json::ValidatedJson;

use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{error, warn};
use utoipa::{IntoParams, ToSchema};

use crate::shared::{validate_pagination, DomainError, PageRequest, PaginatedResult};

/// Response envelope used by every endpoint.
///
/// Success: `{"success": true, "data": {...}}`.
/// Failure: `{"success": false, "data": null, "error": "...", "kind": "not_found"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    /// Human-readable failure message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Machine-readable failure kind (snake_case)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            kind: None,
        }
    }

    pub fn error(kind: &str, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            kind: Some(kind.to_string()),
        }
    }
}

/// Error half of every handler result.
pub type ApiFailure = (StatusCode, Json<ApiResponse<()>>);

pub type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiFailure>;

/// Result of a handler that answers `201 Created` on success.
pub type ApiCreated<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiFailure>;

/// Keeps an explicit JSON `null` apart from an absent field. Pair with
/// `#[serde(default)]` so absence stays `None`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::ConstraintViolation(_)
        | DomainError::RoomUnavailable(_)
        | DomainError::ClientAlreadyCheckedIn(_)
        | DomainError::AlreadyCheckedOut(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        DomainError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Converts a domain error into the structured failure response.
pub fn failure(err: DomainError) -> ApiFailure {
    let status = status_for(&err);
    if status.is_server_error() {
        error!(kind = err.kind(), "Request failed: {}", err);
    } else if status == StatusCode::UNAUTHORIZED {
        warn!("Rejected: {}", err);
    }
    (status, Json(ApiResponse::error(err.kind(), err.to_string())))
}

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success(data)))
}

pub fn created<T>(data: T) -> ApiCreated<T> {
    Ok((StatusCode::CREATED, Json(ApiResponse::success(data))))
}

/// Pagination query parameters
#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct PaginationParams {
    /// Page number, starting at 1. Default: 1
    pub page: Option<u32>,
    /// Items per page (1-100). Default: 20
    pub limit: Option<u32>,
}

impl PaginationParams {
    pub fn page_request(&self) -> PageRequest {
        validate_pagination(self.page, self.limit)
    }
}

/// One page of results with paging metadata
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl<T, D: From<T>> From<PaginatedResult<T>> for PaginatedResponse<D> {
    fn from(result: PaginatedResult<T>) -> Self {
        Self {
            items: result.items.into_iter().map(D::from).collect(),
            total: result.total,
            page: result.page,
            limit: result.limit,
            total_pages: result.total_pages,
        }
    }
}

//! Authentication API handlers

use axum::extract::State;
use axum::http::{header, HeaderMap};

use super::dto::{LoginRequest, LoginResponse};
use crate::application::AccountService;
use crate::domain::DomainError;
use crate::interfaces::http::common::{failure, ok, ApiResponse, ApiResult, ValidatedJson};
use crate::interfaces::http::modules::users::UserDto;

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = ApiResponse<LoginResponse>),
        (status = 401, description = "Invalid credentials or account awaiting approval")
    )
)]
pub async fn login(
    State(accounts): State<AccountService>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let result = accounts
        .login(&request.email, &request.password)
        .await
        .map_err(failure)?;
    ok(result.into())
}

/// Staff account behind the `Authorization: Bearer <token>` header
#[utoipa::path(
    get,
    path = "/auth/me",
    tag = "Authentication",
    responses(
        (status = 200, description = "Account the token was issued to", body = ApiResponse<UserDto>),
        (status = 401, description = "Missing, invalid or expired token")
    )
)]
pub async fn current_user(
    State(accounts): State<AccountService>,
    headers: HeaderMap,
) -> ApiResult<UserDto> {
    let token = bearer_token(&headers)
        .ok_or_else(|| failure(DomainError::Unauthorized("Missing bearer token".into())))?;
    let user = accounts.current_user(token).await.map_err(failure)?;
    ok(user.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn bearer_token_requires_scheme() {
        let mut headers = HeaderMap::new();
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer abc.def"));
        assert_eq!(bearer_token(&headers), Some("abc.def"));

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        assert_eq!(bearer_token(&headers), None);

        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer "));
        assert_eq!(bearer_token(&headers), None);
    }
}

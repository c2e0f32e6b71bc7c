//! JSON body extractor that also runs `validator` rules
//!
//! A body that does not parse is a 400 with kind `invalid_body`. A body that
//! parses but breaks a rule goes through [`failure`] as a
//! `DomainError::Validation`, so it answers exactly like a change-set the
//! services reject.

use axum::extract::{FromRequest, Request};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::{failure, ApiFailure, ApiResponse};
use crate::shared::{validation_message, DomainError};

/// ```ignore
/// async fn check_in(ValidatedJson(body): ValidatedJson<CreateCheckInRequest>) { .. }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiFailure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiResponse::<()>::error(
                    "invalid_body",
                    format!("Invalid JSON: {}", rejection.body_text()),
                )),
            )
        })?;

        value
            .validate()
            .map_err(|errors| failure(DomainError::Validation(validation_message(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::post;
    use axum::Router;
    use serde_json::{json, Value};
    use tower::Service;

    use crate::interfaces::http::modules::clients::CreateClientRequest;
    use crate::interfaces::http::modules::stays::CreateCheckInRequest;

    fn app() -> Router {
        Router::new()
            .route(
                "/check-ins",
                post(|ValidatedJson(body): ValidatedJson<CreateCheckInRequest>| async move {
                    body.room_id.to_string()
                }),
            )
            .route(
                "/clients",
                post(|ValidatedJson(body): ValidatedJson<CreateClientRequest>| async move {
                    body.first_name
                }),
            )
    }

    async fn post_raw(uri: &str, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap();
        let resp = app().into_service().call(req).await.unwrap();
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    async fn post_json(uri: &str, body: Value) -> (StatusCode, Vec<u8>) {
        post_raw(uri, serde_json::to_vec(&body).unwrap()).await
    }

    #[tokio::test]
    async fn valid_check_in_reaches_handler() {
        let (status, body) = post_json(
            "/check-ins",
            json!({"room_id": 12, "staff_user_id": 1, "client_id": 4}),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, b"12");
    }

    #[tokio::test]
    async fn zero_ids_are_rejected_before_the_handler() {
        let (status, body) = post_json(
            "/check-ins",
            json!({"room_id": 0, "staff_user_id": 1, "client_id": 0}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["kind"], "validation_error");
        let message = body["error"].as_str().unwrap();
        assert!(message.contains("room_id: must be a valid id"), "{}", message);
        assert!(message.contains("client_id"));
        assert!(!message.contains("staff_user_id"));
    }

    #[tokio::test]
    async fn missing_field_and_bad_email_differ() {
        let (status, body) = post_json("/check-ins", json!({"room_id": 3})).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["kind"], "invalid_body");
        assert_eq!(body["success"], false);

        let (status, body) = post_json(
            "/clients",
            json!({"first_name": "Grace", "last_name": "Hopper", "email": "grace"}),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].as_str().unwrap().contains("email"));
    }

    #[tokio::test]
    async fn malformed_json_is_bad_request() {
        let (status, body) = post_raw("/clients", "{\"first_name\": ").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["kind"], "invalid_body");
    }
}

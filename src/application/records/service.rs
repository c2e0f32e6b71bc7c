use std::marker::PhantomData;
use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{DomainError, DomainResult, Record, Repository, RepositoryProvider};
use crate::shared::{retry_with_backoff, validation_message, PageRequest, PaginatedResult, RetryConfig};

/// Validated CRUD for one record type.
///
/// Change-sets are validated before they reach storage and transient storage
/// failures are retried once.
pub struct RecordService<T: Record> {
    repos: Arc<dyn RepositoryProvider>,
    retry: RetryConfig,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> Clone for RecordService<T> {
    fn clone(&self) -> Self {
        Self {
            repos: self.repos.clone(),
            retry: self.retry.clone(),
            _record: PhantomData,
        }
    }
}

pub(crate) fn validate(value: &impl Validate) -> DomainResult<()> {
    value
        .validate()
        .map_err(|errors| DomainError::Validation(validation_message(&errors)))
}

impl<T: Record> RecordService<T> {
    pub fn new(repos: Arc<dyn RepositoryProvider>) -> Self {
        Self {
            repos,
            retry: RetryConfig::once(),
            _record: PhantomData,
        }
    }

    fn repo(&self) -> &dyn Repository<T> {
        T::repository(self.repos.as_ref())
    }

    pub async fn list(&self, page: PageRequest) -> DomainResult<PaginatedResult<T>> {
        retry_with_backoff(
            self.retry.clone(),
            || self.repo().list(page),
            DomainError::is_transient,
            &format!("list {}", T::ENTITY),
        )
        .await
    }

    pub async fn get(&self, id: i32) -> DomainResult<T> {
        retry_with_backoff(
            self.retry.clone(),
            || self.repo().get(id),
            DomainError::is_transient,
            &format!("get {}", T::ENTITY),
        )
        .await
    }

    pub async fn create(&self, draft: T::Draft) -> DomainResult<T> {
        validate(&draft)?;

        let record = retry_with_backoff(
            self.retry.clone(),
            || self.repo().create(draft.clone()),
            DomainError::is_transient,
            &format!("create {}", T::ENTITY),
        )
        .await?;

        info!(entity = T::ENTITY, id = record.id(), "Record created");
        Ok(record)
    }

    pub async fn update(&self, id: i32, changes: T::Changes) -> DomainResult<T> {
        validate(&changes)?;

        let record = retry_with_backoff(
            self.retry.clone(),
            || self.repo().update(id, changes.clone()),
            DomainError::is_transient,
            &format!("update {}", T::ENTITY),
        )
        .await?;

        info!(entity = T::ENTITY, id, "Record updated");
        Ok(record)
    }

    pub async fn delete(&self, id: i32) -> DomainResult<()> {
        let record = self.get(id).await?;
        record.guard_delete()?;

        retry_with_backoff(
            self.retry.clone(),
            || self.repo().delete(id),
            DomainError::is_transient,
            &format!("delete {}", T::ENTITY),
        )
        .await?;

        info!(entity = T::ENTITY, id, "Record deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewRoom, Room, RoomChanges, User, UserChanges};
    use crate::infrastructure::database::test_support::{
        new_client, new_user, seed_front_desk, setup_test_db,
    };
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn repos() -> Arc<dyn RepositoryProvider> {
        Arc::new(SeaOrmRepositoryProvider::new(setup_test_db().await))
    }

    #[tokio::test]
    async fn invalid_draft_never_reaches_storage() {
        let repos = repos().await;
        let users = RecordService::<User>::new(repos.clone());

        let mut draft = new_user("not-an-email", "long-enough");
        draft.password = "short".into();
        let err = users.create(draft).await.unwrap_err();

        match err {
            DomainError::Validation(msg) => {
                assert!(msg.contains("email"));
                assert!(msg.contains("password"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        let page = users.list(PageRequest::default()).await.unwrap();
        assert_eq!(page.total, 0);
    }

    #[tokio::test]
    async fn invalid_changes_are_rejected() {
        let repos = repos().await;
        let users = RecordService::<User>::new(repos.clone());
        let user = users.create(new_user("f@desk.test", "password-6")).await.unwrap();

        let changes = UserChanges {
            first_name: Some(String::new()),
            ..UserChanges::default()
        };
        let err = users.update(user.id, changes).await.unwrap_err();
        assert_eq!(err.kind(), "validation_error");
    }

    #[tokio::test]
    async fn occupied_room_cannot_be_deleted() {
        let repos = repos().await;
        let desk = seed_front_desk(repos.as_ref()).await;
        repos
            .stays()
            .check_in(crate::domain::CheckInRequest {
                room_id: desk.room.id,
                staff_user_id: desk.staff.id,
                client_id: desk.client.id,
            })
            .await
            .unwrap();

        let rooms = RecordService::<Room>::new(repos.clone());
        let err = rooms.delete(desk.room.id).await.unwrap_err();
        assert!(matches!(err, DomainError::RoomUnavailable(_)));
        assert!(rooms.get(desk.room.id).await.is_ok());
    }

    #[tokio::test]
    async fn vacant_room_lifecycle() {
        let repos = repos().await;
        let desk = seed_front_desk(repos.as_ref()).await;
        let rooms = RecordService::<Room>::new(repos.clone());

        let room = rooms
            .create(NewRoom {
                hotel_id: desk.hotel.id,
                name: "C3".into(),
                location: None,
                amenities: vec![],
                pictures: vec!["c3.jpg".into()],
                price: 75.0,
            })
            .await
            .unwrap();
        let room = rooms
            .update(
                room.id,
                RoomChanges {
                    name: Some("C3-deluxe".into()),
                    ..RoomChanges::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(room.name, "C3-deluxe");

        rooms.delete(room.id).await.unwrap();
        let err = rooms.get(room.id).await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
        let err = rooms.delete(room.id).await.unwrap_err();
        assert_eq!(err.kind(), "not_found");
    }

    #[tokio::test]
    async fn clients_are_listed_through_service() {
        let repos = repos().await;
        let clients = RecordService::<crate::domain::Client>::new(repos);
        clients.create(new_client("Noor")).await.unwrap();
        let page = clients.list(PageRequest::new(1, 10)).await.unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].first_name, "Noor");
    }
}

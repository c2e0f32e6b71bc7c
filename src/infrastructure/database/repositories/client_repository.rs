use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, Set};

use super::record_repository::EntityMapping;
use crate::domain::{Client, ClientChanges, DomainResult, NewClient};
use crate::infrastructure::database::entities::client;

impl EntityMapping for Client {
    type Entity = client::Entity;
    type ActiveModel = client::ActiveModel;

    fn id_column() -> client::Column {
        client::Column::Id
    }

    fn from_model(model: client::Model) -> Self {
        Client {
            id: model.id,
            first_name: model.first_name,
            last_name: model.last_name,
            phone_num: model.phone_num,
            address: model.address,
            email: model.email,
            identity_type: model.identity_type,
            identity_num: model.identity_num,
            identity_pic: model.identity_pic,
            created_at: model.created_at,
        }
    }

    fn draft_into_active(draft: NewClient, now: DateTime<Utc>) -> DomainResult<client::ActiveModel> {
        Ok(client::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            phone_num: Set(draft.phone_num),
            address: Set(draft.address),
            email: Set(draft.email),
            identity_type: Set(draft.identity_type),
            identity_num: Set(draft.identity_num),
            identity_pic: Set(draft.identity_pic),
            created_at: Set(now),
        })
    }

    fn apply_changes(active: &mut client::ActiveModel, changes: ClientChanges) -> DomainResult<()> {
        if let Some(first_name) = changes.first_name {
            active.first_name = Set(first_name);
        }
        if let Some(last_name) = changes.last_name {
            active.last_name = Set(last_name);
        }
        if let Some(phone_num) = changes.phone_num {
            active.phone_num = Set(Some(phone_num));
        }
        if let Some(address) = changes.address {
            active.address = Set(Some(address));
        }
        if let Some(email) = changes.email {
            active.email = Set(Some(email));
        }
        if let Some(identity_type) = changes.identity_type {
            active.identity_type = Set(Some(identity_type));
        }
        if let Some(identity_num) = changes.identity_num {
            active.identity_num = Set(Some(identity_num));
        }
        if let Some(identity_pic) = changes.identity_pic {
            active.identity_pic = Set(Some(identity_pic));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{ClientChanges, DomainError, RepositoryProvider};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::{new_client, setup_test_db};
    use crate::shared::PageRequest;

    #[tokio::test]
    async fn list_pages_in_id_order() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        for name in ["Ann", "Ben", "Cat", "Dan", "Eve"] {
            repos.clients().create(new_client(name)).await.unwrap();
        }

        let page = repos.clients().list(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(page.total, 5);
        assert_eq!(page.total_pages, 3);
        let names: Vec<_> = page.items.iter().map(|c| c.first_name.as_str()).collect();
        assert_eq!(names, ["Cat", "Dan"]);
    }

    #[tokio::test]
    async fn update_only_touches_given_fields() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let created = repos.clients().create(new_client("Ivy")).await.unwrap();

        let changes = ClientChanges {
            email: Some("ivy@guest.test".into()),
            ..ClientChanges::default()
        };
        let updated = repos.clients().update(created.id, changes).await.unwrap();
        assert_eq!(updated.email.as_deref(), Some("ivy@guest.test"));
        assert_eq!(updated.identity_num, created.identity_num);
        assert_eq!(updated.created_at, created.created_at);

        let unchanged = repos
            .clients()
            .update(created.id, ClientChanges::default())
            .await
            .unwrap();
        assert_eq!(unchanged, updated);
    }

    #[tokio::test]
    async fn update_missing_row_is_not_found() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let err = repos
            .clients()
            .update(404, ClientChanges::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "Client", .. }));
    }
}

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue::NotSet, Set};

use super::record_repository::EntityMapping;
use crate::domain::{DomainResult, NewRole, Role, RoleChanges};
use crate::infrastructure::database::entities::role;

impl EntityMapping for Role {
    type Entity = role::Entity;
    type ActiveModel = role::ActiveModel;

    fn id_column() -> role::Column {
        role::Column::Id
    }

    fn from_model(model: role::Model) -> Self {
        Role {
            id: model.id,
            name: model.name,
            created_at: model.created_at,
        }
    }

    fn draft_into_active(draft: NewRole, now: DateTime<Utc>) -> DomainResult<role::ActiveModel> {
        Ok(role::ActiveModel {
            id: NotSet,
            name: Set(draft.name),
            created_at: Set(now),
        })
    }

    fn apply_changes(active: &mut role::ActiveModel, changes: RoleChanges) -> DomainResult<()> {
        if let Some(name) = changes.name {
            active.name = Set(name);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{DomainError, NewRole, RepositoryProvider, UserChanges};
    use crate::infrastructure::database::repositories::SeaOrmRepositoryProvider;
    use crate::infrastructure::database::test_support::{new_user, setup_test_db};

    fn role(name: &str) -> NewRole {
        NewRole {
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn role_names_are_unique() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        repos.roles().create(role("receptionist")).await.unwrap();
        let err = repos.roles().create(role("receptionist")).await.unwrap_err();
        assert!(matches!(err, DomainError::ConstraintViolation(_)));
    }

    #[tokio::test]
    async fn deleting_role_detaches_users() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let manager = repos.roles().create(role("manager")).await.unwrap();
        let user = repos
            .users()
            .create(new_user("m@desk.test", "manager-pass"))
            .await
            .unwrap();
        let changes = UserChanges {
            role_id: Some(Some(manager.id)),
            ..UserChanges::default()
        };
        let user = repos.users().update(user.id, changes).await.unwrap();
        assert_eq!(user.role_id, Some(manager.id));

        repos.roles().delete(manager.id).await.unwrap();
        let user = repos.users().get(user.id).await.unwrap();
        assert_eq!(user.role_id, None);
    }

    #[tokio::test]
    async fn unknown_role_reference_is_rejected() {
        let repos = SeaOrmRepositoryProvider::new(setup_test_db().await);
        let mut draft = new_user("x@desk.test", "password-x");
        draft.role_id = Some(77);
        let err = repos.users().create(draft).await.unwrap_err();
        assert_eq!(err.kind(), "constraint_violation");
    }
}

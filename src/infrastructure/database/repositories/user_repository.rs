use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

use super::record_repository::EntityMapping;
use crate::auth::hash_password;
use crate::domain::{DomainError, DomainResult, NewUser, User, UserAccountRepository, UserChanges};
use crate::infrastructure::database::db_err;
use crate::infrastructure::database::entities::user;

// ── Conversion helpers ──────────────────────────────────────────

fn user_model_to_domain(model: user::Model) -> User {
    User {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        phone_num: model.phone_num,
        address: model.address,
        email: model.email,
        password_hash: model.password_hash,
        hotel_id: model.hotel_id,
        role_id: model.role_id,
        approved: model.approved,
        approved_at: model.approved_at,
        created_at: model.created_at,
    }
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn hash(password: &str) -> DomainResult<String> {
    hash_password(password)
        .map_err(|e| DomainError::Storage(format!("Failed to hash password: {}", e)))
}

impl EntityMapping for User {
    type Entity = user::Entity;
    type ActiveModel = user::ActiveModel;

    fn id_column() -> user::Column {
        user::Column::Id
    }

    fn from_model(model: user::Model) -> Self {
        user_model_to_domain(model)
    }

    fn draft_into_active(draft: NewUser, now: DateTime<Utc>) -> DomainResult<user::ActiveModel> {
        Ok(user::ActiveModel {
            id: NotSet,
            first_name: Set(draft.first_name),
            last_name: Set(draft.last_name),
            phone_num: Set(draft.phone_num),
            address: Set(draft.address),
            email: Set(normalize_email(&draft.email)),
            password_hash: Set(hash(&draft.password)?),
            hotel_id: Set(draft.hotel_id),
            role_id: Set(draft.role_id),
            approved: Set(false),
            approved_at: Set(None),
            created_at: Set(now),
        })
    }

    fn apply_changes(active: &mut user::ActiveModel, changes: UserChanges) -> DomainResult<()> {
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
            active.email = Set(normalize_email(&email));
        }
        if let Some(password) = changes.password {
            active.password_hash = Set(hash(&password)?);
        }
        if let Some(hotel_id) = changes.hotel_id {
            active.hotel_id = Set(hotel_id);
        }
        if let Some(role_id) = changes.role_id {
            active.role_id = Set(role_id);
        }
        Ok(())
    }
}

// ── Account operations ──────────────────────────────────────────

pub struct SeaOrmUserAccountRepository {
    db: DatabaseConnection,
}

impl SeaOrmUserAccountRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserAccountRepository for SeaOrmUserAccountRepository {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(normalize_email(email)))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(user_model_to_domain))
    }

    async fn approve(&self, id: i32) -> DomainResult<User> {
        // Only the first approval stamps approved_at
        user::Entity::update_many()
            .col_expr(user::Column::Approved, Expr::value(true))
            .col_expr(user::Column::ApprovedAt, Expr::value(Utc::now()))
            .filter(user::Column::Id.eq(id))
            .filter(user::Column::ApprovedAt.is_null())
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        let model = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found("User", id))?;

        Ok(user_model_to_domain(model))
    }
}

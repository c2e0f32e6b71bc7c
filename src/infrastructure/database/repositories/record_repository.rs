//! Generic SeaORM repository shared by every administratively managed record
//!
//! Each record type describes how it maps onto its table through
//! [`EntityMapping`]; list/find/create/update/delete are written once here.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use log::debug;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, TransactionTrait,
};

use crate::domain::{DomainError, DomainResult, Record, Repository};
use crate::infrastructure::database::db_err;
use crate::shared::{PageRequest, PaginatedResult};

/// Table mapping for a domain record.
pub trait EntityMapping: Record {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send;

    fn id_column() -> <Self::Entity as EntityTrait>::Column;

    fn from_model(model: <Self::Entity as EntityTrait>::Model) -> Self;

    /// Builds the row for a validated draft. The id is left to storage.
    fn draft_into_active(draft: Self::Draft, now: DateTime<Utc>)
        -> DomainResult<Self::ActiveModel>;

    /// Writes every `Some` field of the patch into `active`.
    fn apply_changes(active: &mut Self::ActiveModel, changes: Self::Changes) -> DomainResult<()>;
}

pub struct SeaOrmRecordRepository<T> {
    db: DatabaseConnection,
    _record: PhantomData<fn() -> T>,
}

impl<T> SeaOrmRecordRepository<T> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T> Repository<T> for SeaOrmRecordRepository<T>
where
    T: EntityMapping,
    <T::Entity as EntityTrait>::Model: IntoActiveModel<T::ActiveModel> + Sync,
{
    async fn list(&self, page: PageRequest) -> DomainResult<PaginatedResult<T>> {
        let query = T::Entity::find().order_by_asc(T::id_column());

        let total = query.clone().count(&self.db).await.map_err(db_err)?;
        let models = query
            .offset(page.offset())
            .limit(page.limit as u64)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        let items = models.into_iter().map(T::from_model).collect();
        Ok(PaginatedResult::new(items, total, page.page, page.limit))
    }

    async fn find(&self, id: i32) -> DomainResult<Option<T>> {
        let model = T::Entity::find()
            .filter(T::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(T::from_model))
    }

    async fn create(&self, draft: T::Draft) -> DomainResult<T> {
        let active = T::draft_into_active(draft, Utc::now())?;
        let model = active.insert(&self.db).await.map_err(db_err)?;
        let record = T::from_model(model);

        debug!("{} {} created", T::ENTITY, record.id());
        Ok(record)
    }

    async fn update(&self, id: i32, changes: T::Changes) -> DomainResult<T> {
        // The guard and the write see the same row
        let txn = self.db.begin().await.map_err(db_err)?;

        let existing = T::Entity::find()
            .filter(T::id_column().eq(id))
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))?;

        T::from_model(existing.clone()).guard_update(&changes)?;

        let mut active: T::ActiveModel = existing.clone().into_active_model();
        T::apply_changes(&mut active, changes)?;

        if !active.is_changed() {
            return Ok(T::from_model(existing));
        }

        let updated = active.update(&txn).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::not_found(T::ENTITY, id),
            other => db_err(other),
        })?;
        txn.commit().await.map_err(db_err)?;

        debug!("{} {} updated", T::ENTITY, id);
        Ok(T::from_model(updated))
    }

    async fn delete(&self, id: i32) -> DomainResult<()> {
        let result = T::Entity::delete_many()
            .filter(T::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        if result.rows_affected == 0 {
            return Err(DomainError::not_found(T::ENTITY, id));
        }

        debug!("{} {} deleted", T::ENTITY, id);
        Ok(())
    }
}

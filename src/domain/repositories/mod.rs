//! Repository traits for the domain layer
//!
//! Contains:
//! - `Record` - an entity with a storage-generated id and explicit change-sets
//! - `Repository<T>` - the one CRUD surface shared by every `Record`
//! - `RepositoryProvider` - unified access to all repositories
//! - `DomainResult` - standard result type for domain operations

use async_trait::async_trait;
use validator::Validate;

use super::client::Client;
use super::hotel::Hotel;
use super::role::Role;
use super::room::Room;
use super::stay::StayRepository;
use super::user::{User, UserAccountRepository};
use crate::shared::{DomainError, PageRequest, PaginatedResult};

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// An administratively managed entity.
///
/// `Draft` is the validated change-set used to create a row, `Changes` the
/// validated patch applied on update (only `Some` fields are written).
pub trait Record: Clone + Send + Sync + Sized + 'static {
    /// Entity name used in error messages and logs.
    const ENTITY: &'static str;

    type Draft: Validate + Clone + Send + Sync + 'static;
    type Changes: Validate + Clone + Send + Sync + 'static;

    fn id(&self) -> i32;

    /// Picks this record's repository out of the provider.
    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self>;

    /// Refuses a patch that the row's current state forbids.
    fn guard_update(&self, _changes: &Self::Changes) -> DomainResult<()> {
        Ok(())
    }

    /// Refuses deletion of a row whose current state forbids it.
    fn guard_delete(&self) -> DomainResult<()> {
        Ok(())
    }
}

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// One page of rows ordered by id.
    async fn list(&self, page: PageRequest) -> DomainResult<PaginatedResult<T>>;
    async fn find(&self, id: i32) -> DomainResult<Option<T>>;

    async fn get(&self, id: i32) -> DomainResult<T> {
        self.find(id)
            .await?
            .ok_or_else(|| DomainError::not_found(T::ENTITY, id))
    }

    async fn create(&self, draft: T::Draft) -> DomainResult<T>;
    async fn update(&self, id: i32, changes: T::Changes) -> DomainResult<T>;
    async fn delete(&self, id: i32) -> DomainResult<()>;
}

// ── RepositoryProvider ──────────────────────────────────────────

/// Provides access to all domain repositories.
///
/// ```ignore
/// async fn handle(repos: &dyn RepositoryProvider) {
///     let room = repos.rooms().get(12).await?;
///     let stays = repos.stays().list_check_ins(CheckInFilter::open(), PageRequest::default()).await?;
/// }
/// ```
pub trait RepositoryProvider: Send + Sync {
    fn users(&self) -> &dyn Repository<User>;
    fn user_accounts(&self) -> &dyn UserAccountRepository;
    fn clients(&self) -> &dyn Repository<Client>;
    fn hotels(&self) -> &dyn Repository<Hotel>;
    fn rooms(&self) -> &dyn Repository<Room>;
    fn roles(&self) -> &dyn Repository<Role>;
    fn stays(&self) -> &dyn StayRepository;
}

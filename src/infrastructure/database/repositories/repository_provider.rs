//! SeaORM implementation of RepositoryProvider

use sea_orm::DatabaseConnection;

use crate::domain::{
    Client, Hotel, Repository, RepositoryProvider, Role, Room, StayRepository, User,
    UserAccountRepository,
};

use super::record_repository::SeaOrmRecordRepository;
use super::stay_repository::SeaOrmStayRepository;
use super::user_repository::SeaOrmUserAccountRepository;

/// Unified repository provider backed by SeaORM.
///
/// Holds one connection pool and exposes per-aggregate repository accessors.
///
/// ```ignore
/// let repos = SeaOrmRepositoryProvider::new(db.clone());
/// let room = repos.rooms().get(12).await?;
/// let stay = repos.stays().check_in(request).await?;
/// ```
pub struct SeaOrmRepositoryProvider {
    db: DatabaseConnection,
    users: SeaOrmRecordRepository<User>,
    user_accounts: SeaOrmUserAccountRepository,
    clients: SeaOrmRecordRepository<Client>,
    hotels: SeaOrmRecordRepository<Hotel>,
    rooms: SeaOrmRecordRepository<Room>,
    roles: SeaOrmRecordRepository<Role>,
    stays: SeaOrmStayRepository,
}

impl SeaOrmRepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: SeaOrmRecordRepository::new(db.clone()),
            user_accounts: SeaOrmUserAccountRepository::new(db.clone()),
            clients: SeaOrmRecordRepository::new(db.clone()),
            hotels: SeaOrmRecordRepository::new(db.clone()),
            rooms: SeaOrmRecordRepository::new(db.clone()),
            roles: SeaOrmRecordRepository::new(db.clone()),
            stays: SeaOrmStayRepository::new(db.clone()),
            db,
        }
    }

    /// Get database connection reference
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl RepositoryProvider for SeaOrmRepositoryProvider {
    fn users(&self) -> &dyn Repository<User> {
        &self.users
    }

    fn user_accounts(&self) -> &dyn UserAccountRepository {
        &self.user_accounts
    }

    fn clients(&self) -> &dyn Repository<Client> {
        &self.clients
    }

    fn hotels(&self) -> &dyn Repository<Hotel> {
        &self.hotels
    }

    fn rooms(&self) -> &dyn Repository<Room> {
        &self.rooms
    }

    fn roles(&self) -> &dyn Repository<Role> {
        &self.roles
    }

    fn stays(&self) -> &dyn StayRepository {
        &self.stays
    }
}

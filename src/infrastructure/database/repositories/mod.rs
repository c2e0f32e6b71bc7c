//! Database repository implementations
//!
//! One generic SeaORM record repository with per-entity mappings, the
//! check-in/check-out repository, and the unified RepositoryProvider.

pub mod client_repository;
pub mod hotel_repository;
pub mod record_repository;
pub mod repository_provider;
pub mod role_repository;
pub mod room_repository;
pub mod stay_repository;
pub mod user_repository;

pub use record_repository::{EntityMapping, SeaOrmRecordRepository};
pub use repository_provider::SeaOrmRepositoryProvider;
pub use stay_repository::SeaOrmStayRepository;
pub use user_repository::SeaOrmUserAccountRepository;

pub mod entities;
pub mod migrator;
pub mod repositories;

#[cfg(test)]
pub mod test_support;

use std::time::Duration;

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr, SqlErr};
use tracing::info;

use crate::shared::DomainError;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Database URL (e.g., "sqlite://./roomee.db?mode=rwc")
    pub url: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./roomee.db?mode=rwc".to_string(),
            max_connections: 10,
        }
    }
}

impl DatabaseConfig {
    /// Create config for SQLite
    pub fn sqlite(path: &str) -> Self {
        Self {
            url: format!("sqlite://{}?mode=rwc", path),
            ..Self::default()
        }
    }
}

/// Initialize database connection pool
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    info!("Connecting to database: {}", config.url);
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections.max(1))
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);
    let db = Database::connect(options).await?;
    info!("Database connected successfully");
    Ok(db)
}

/// Classifies a storage error into the domain error kinds.
///
/// Pool, connection and lock-contention failures are `Unavailable`
/// (retryable), unique and foreign-key failures are `ConstraintViolation`,
/// anything else is `Storage`.
pub fn db_err(e: DbErr) -> DomainError {
    match e.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(msg)) => {
            return DomainError::ConstraintViolation(format!("unique constraint failed: {}", msg))
        }
        Some(SqlErr::ForeignKeyConstraintViolation(msg)) => {
            return DomainError::ConstraintViolation(format!(
                "foreign key constraint failed: {}",
                msg
            ))
        }
        _ => {}
    }

    match e {
        DbErr::ConnectionAcquire(err) => DomainError::Unavailable(err.to_string()),
        other if other.to_string().contains("database is locked") => {
            DomainError::Unavailable(other.to_string())
        }
        DbErr::Conn(err) => DomainError::Unavailable(err.to_string()),
        // RESTRICT foreign keys report SQLITE_CONSTRAINT_TRIGGER, which
        // `sql_err` does not classify
        other if is_constraint_message(&other.to_string()) => {
            DomainError::ConstraintViolation(constraint_summary(&other.to_string()))
        }
        other => DomainError::Storage(other.to_string()),
    }
}

const CONSTRAINT_MARKERS: [&str; 2] = ["UNIQUE constraint failed", "FOREIGN KEY constraint failed"];

fn is_constraint_message(msg: &str) -> bool {
    CONSTRAINT_MARKERS.iter().any(|marker| msg.contains(marker))
}

/// Drops the driver prefix so only the constraint text reaches callers.
fn constraint_summary(msg: &str) -> String {
    CONSTRAINT_MARKERS
        .iter()
        .find_map(|marker| msg.find(marker).map(|at| msg[at..].to_string()))
        .unwrap_or_else(|| msg.to_string())
}

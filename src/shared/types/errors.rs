use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Room {0} is not available")]
    RoomUnavailable(i32),

    #[error("Client {0} already has an open check-in")]
    ClientAlreadyCheckedIn(i32),

    #[error("Check-in {0} is already checked out")]
    AlreadyCheckedOut(i32),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        DomainError::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    /// Stable machine-readable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => "not_found",
            DomainError::Validation(_) => "validation_error",
            DomainError::ConstraintViolation(_) => "constraint_violation",
            DomainError::RoomUnavailable(_) => "room_unavailable",
            DomainError::ClientAlreadyCheckedIn(_) => "client_already_checked_in",
            DomainError::AlreadyCheckedOut(_) => "already_checked_out",
            DomainError::Unauthorized(_) => "unauthorized",
            DomainError::Unavailable(_) => "unavailable",
            DomainError::Storage(_) => "storage_error",
        }
    }

    /// Whether this error is likely transient (e.g. DB connection lost)
    /// and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        matches!(self, DomainError::Unavailable(_))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

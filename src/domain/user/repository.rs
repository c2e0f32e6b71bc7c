use async_trait::async_trait;

use super::User;
use crate::domain::DomainResult;

/// Account-level operations that sit outside plain CRUD.
#[async_trait]
pub trait UserAccountRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Marks the account approved. The first approval time is kept.
    async fn approve(&self, id: i32) -> DomainResult<User>;
}

//! Staff account service: application-layer orchestration
//!
//! HTTP handlers are thin wrappers that delegate here.

use std::sync::Arc;

use tracing::{info, warn};

use crate::auth::{create_token, verify_token, JwtConfig};
use crate::domain::{DomainError, DomainResult, RepositoryProvider, User};
use crate::shared::{retry_with_backoff, RetryConfig};

/// Authentication result returned after a successful login
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: User,
}

#[derive(Clone)]
pub struct AccountService {
    repos: Arc<dyn RepositoryProvider>,
    jwt_config: JwtConfig,
}

impl AccountService {
    pub fn new(repos: Arc<dyn RepositoryProvider>, jwt_config: JwtConfig) -> Self {
        Self { repos, jwt_config }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate staff by email + password and return a JWT.
    ///
    /// Unknown email, wrong password and unapproved accounts are all
    /// `Unauthorized`. Approval is only reported once the password matched.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        let user = retry_with_backoff(
            RetryConfig::once(),
            || self.repos.user_accounts().find_by_email(email),
            DomainError::is_transient,
            "find_user_by_email",
        )
        .await?;

        let Some(user) = user else {
            warn!("Login failed: unknown email");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        };

        if !user.check_password(password) {
            warn!(user_id = user.id, "Login failed: wrong password");
            return Err(DomainError::Unauthorized("Invalid credentials".into()));
        }

        if !user.approved {
            warn!(user_id = user.id, "Login refused: account not approved");
            return Err(DomainError::Unauthorized(
                "Account is awaiting approval".into(),
            ));
        }

        let token = create_token(user.id, &user.email, &self.jwt_config)
            .map_err(|e| DomainError::Storage(format!("Failed to create token: {}", e)))?;

        info!(user_id = user.id, "User logged in");
        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user,
        })
    }

    /// Resolve a bearer token issued by [`login`](Self::login) back to its
    /// account. The account must still exist and be approved.
    pub async fn current_user(&self, token: &str) -> DomainResult<User> {
        let claims = verify_token(token, &self.jwt_config).map_err(|e| {
            warn!("Rejected token: {}", e);
            DomainError::Unauthorized("Invalid or expired token".into())
        })?;
        let user_id = claims
            .user_id()
            .ok_or_else(|| DomainError::Unauthorized("Invalid or expired token".into()))?;

        let user = match self.repos.users().get(user_id).await {
            Ok(user) => user,
            Err(DomainError::NotFound { .. }) => {
                return Err(DomainError::Unauthorized("Account no longer exists".into()))
            }
            Err(e) => return Err(e),
        };
        if !user.approved {
            return Err(DomainError::Unauthorized(
                "Account is awaiting approval".into(),
            ));
        }
        Ok(user)
    }

    // ── Approval ────────────────────────────────────────────────

    /// Approve a staff account. Approving twice keeps the first timestamp.
    pub async fn approve(&self, user_id: i32) -> DomainResult<User> {
        let user = retry_with_backoff(
            RetryConfig::once(),
            || self.repos.user_accounts().approve(user_id),
            DomainError::is_transient,
            "approve_user",
        )
        .await?;

        info!(user_id, approved_at = ?user.approved_at, "User approved");
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::test_support::{new_user, setup_test_db};
    use crate::infrastructure::SeaOrmRepositoryProvider;

    async fn service() -> (Arc<dyn RepositoryProvider>, AccountService) {
        let repos: Arc<dyn RepositoryProvider> =
            Arc::new(SeaOrmRepositoryProvider::new(setup_test_db().await));
        let service = AccountService::new(repos.clone(), JwtConfig::default());
        (repos, service)
    }

    #[tokio::test]
    async fn approved_staff_gets_token() {
        let (repos, service) = service().await;
        let user = repos
            .users()
            .create(new_user("g@desk.test", "morning-shift"))
            .await
            .unwrap();
        service.approve(user.id).await.unwrap();

        let auth = service.login("g@desk.test", "morning-shift").await.unwrap();
        assert_eq!(auth.token_type, "Bearer");
        assert_eq!(auth.expires_in, 24 * 3600);
        assert_eq!(auth.user.id, user.id);

        let claims = verify_token(&auth.token, &JwtConfig::default()).unwrap();
        assert_eq!(claims.user_id(), Some(user.id));
    }

    #[tokio::test]
    async fn token_resolves_to_current_user() {
        let (repos, service) = service().await;
        let user = repos
            .users()
            .create(new_user("j@desk.test", "late-shift"))
            .await
            .unwrap();
        service.approve(user.id).await.unwrap();
        let auth = service.login("j@desk.test", "late-shift").await.unwrap();

        let me = service.current_user(&auth.token).await.unwrap();
        assert_eq!(me.id, user.id);

        let err = service.current_user("not-a-token").await.unwrap_err();
        assert_eq!(err.kind(), "unauthorized");

        let foreign = create_token(
            user.id,
            "j@desk.test",
            &JwtConfig {
                secret: "someone-else".into(),
                ..JwtConfig::default()
            },
        )
        .unwrap();
        assert!(service.current_user(&foreign).await.is_err());

        repos.users().delete(user.id).await.unwrap();
        let err = service.current_user(&auth.token).await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(msg) if msg.contains("no longer")));
    }

    #[tokio::test]
    async fn bad_credentials_are_unauthorized() {
        let (repos, service) = service().await;
        let user = repos
            .users()
            .create(new_user("h@desk.test", "evening-shift"))
            .await
            .unwrap();
        service.approve(user.id).await.unwrap();

        let err = service.login("h@desk.test", "wrong").await.unwrap_err();
        assert_eq!(err.kind(), "unauthorized");
        let err = service.login("nobody@desk.test", "evening-shift").await.unwrap_err();
        assert_eq!(err.kind(), "unauthorized");
    }

    #[tokio::test]
    async fn unapproved_staff_cannot_log_in() {
        let (repos, service) = service().await;
        repos
            .users()
            .create(new_user("i@desk.test", "pending-pass"))
            .await
            .unwrap();

        let err = service.login("i@desk.test", "pending-pass").await.unwrap_err();
        assert!(matches!(err, DomainError::Unauthorized(msg) if msg.contains("approval")));
    }
}

//! User domain entity

use chrono::{DateTime, Utc};

use super::{NewUser, UserChanges};
use crate::auth::verify_password;
use crate::domain::repositories::{Record, Repository, RepositoryProvider};

/// A staff account. `password_hash` is a bcrypt digest, never plaintext.
#[derive(Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_num: Option<String>,
    pub address: Option<String>,
    pub email: String,
    pub password_hash: String,
    pub hotel_id: Option<i32>,
    pub role_id: Option<i32>,
    pub approved: bool,
    pub approved_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Checks a candidate password against the stored hash.
    /// A malformed hash never matches.
    pub fn check_password(&self, candidate: &str) -> bool {
        verify_password(candidate, &self.password_hash).unwrap_or(false)
    }
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("hotel_id", &self.hotel_id)
            .field("role_id", &self.role_id)
            .field("approved", &self.approved)
            .field("password_hash", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Record for User {
    const ENTITY: &'static str = "User";

    type Draft = NewUser;
    type Changes = UserChanges;

    fn id(&self) -> i32 {
        self.id
    }

    fn repository(repos: &dyn RepositoryProvider) -> &dyn Repository<Self> {
        repos.users()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;

    fn user_with_password(password: &str) -> User {
        User {
            id: 1,
            first_name: "Ada".into(),
            last_name: "Obi".into(),
            phone_num: None,
            address: None,
            email: "ada@example.com".into(),
            password_hash: hash_password(password).unwrap(),
            hotel_id: None,
            role_id: None,
            approved: false,
            approved_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn check_password_matches_only_original() {
        let user = user_with_password("correct horse");
        assert_ne!(user.password_hash, "correct horse");
        assert!(user.check_password("correct horse"));
        assert!(!user.check_password("correct horse "));
        assert!(!user.check_password(""));
    }

    #[test]
    fn malformed_hash_never_matches() {
        let mut user = user_with_password("whatever1");
        user.password_hash = "not-a-bcrypt-hash".into();
        assert!(!user.check_password("not-a-bcrypt-hash"));
    }

    #[test]
    fn debug_output_hides_hash() {
        let user = user_with_password("secret-pass");
        let printed = format!("{:?}", user);
        assert!(!printed.contains(&user.password_hash));
        assert!(printed.contains("<redacted>"));
        assert_eq!(user.full_name(), "Ada Obi");
    }
}

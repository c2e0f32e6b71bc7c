//! Password hashing utilities

use bcrypt::{hash, verify};

/// Hash a password using bcrypt (salted, one-way)
pub fn hash_password(password: &str) -> Result<String, bcrypt::BcryptError> {
    hash(password, cost())
}

/// Verify a password against a hash
pub fn verify_password(password: &str, hash: &str) -> Result<bool, bcrypt::BcryptError> {
    verify(password, hash)
}

// Lower cost under test.
#[cfg(not(test))]
fn cost() -> u32 {
    bcrypt::DEFAULT_COST
}

#[cfg(test)]
fn cost() -> u32 {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = "secure_password_123";
        let hashed = hash_password(password).unwrap();

        assert_ne!(hashed, password);
        assert!(verify_password(password, &hashed).unwrap());
        assert!(!verify_password("wrong_password", &hashed).unwrap());
    }

    #[test]
    fn test_same_password_hashes_differently() {
        let a = hash_password("same-input").unwrap();
        let b = hash_password("same-input").unwrap();
        assert_ne!(a, b);
    }
}

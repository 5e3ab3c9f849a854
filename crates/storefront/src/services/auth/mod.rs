//! Authentication service.
//!
//! Credential-based signup and login against the `users` collection. The
//! session itself is owned by the middleware layer; this service only
//! verifies credentials and produces the `Principal` to store.

mod error;

pub use error::AuthError;

use mongodb::Database;

use phone_dokan_core::Email;

use crate::db::RepositoryError;
use crate::db::users::UserRepository;
use crate::models::Principal;

/// bcrypt cost factor used for password hashes.
pub const BCRYPT_COST: u32 = 10;

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
}

impl AuthService {
    /// Create a new authentication service.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            users: UserRepository::new(db),
        }
    }

    /// Register a new user.
    ///
    /// The 6-character password minimum is advisory and lives in the form
    /// markup only; the server does not re-check length.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingField` if username or password is empty.
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::UserAlreadyExists` if the email is registered,
    /// whether caught by the pre-check or by the unique-index race.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
    ) -> Result<Principal, AuthError> {
        let username = username.trim();
        if username.is_empty() {
            return Err(AuthError::MissingField("username"));
        }
        if password.is_empty() {
            return Err(AuthError::MissingField("password"));
        }

        let email = Email::parse(email)?;

        if self.users.get_by_email(&email).await?.is_some() {
            return Err(AuthError::UserAlreadyExists);
        }

        let password_hash = hash_password(password)?;

        let id = self
            .users
            .create(username, &email, &password_hash)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict(_) => AuthError::UserAlreadyExists,
                other => AuthError::Repository(other),
            })?;

        Ok(Principal {
            id,
            name: username.to_owned(),
            email,
        })
    }

    /// Login with email and password.
    ///
    /// An unregistered email, a malformed email, and a wrong password all
    /// fail with the same `InvalidCredentials` error so callers cannot
    /// enumerate accounts.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if the email/password pair
    /// does not match a user.
    pub async fn login(&self, email: &str, password: &str) -> Result<Principal, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &user.password)?;

        Ok(Principal {
            id: user.user_id(),
            name: user.username.clone(),
            email,
        })
    }
}

/// Hash a password with bcrypt at the service cost factor.
fn hash_password(password: &str) -> Result<String, AuthError> {
    bcrypt::hash(password, BCRYPT_COST).map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored bcrypt hash.
///
/// A malformed stored hash is treated as a mismatch rather than surfaced.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    match bcrypt::verify(password, hash) {
        Ok(true) => Ok(()),
        Ok(false) | Err(_) => Err(AuthError::InvalidCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests hash at the bcrypt minimum cost; BCRYPT_COST is for production
    // hashes and would make the suite crawl.
    const TEST_COST: u32 = 4;

    #[test]
    fn verify_accepts_matching_password() {
        let hash = bcrypt::hash("open sesame", TEST_COST).expect("hash");
        assert!(verify_password("open sesame", &hash).is_ok());
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = bcrypt::hash("open sesame", TEST_COST).expect("hash");
        assert!(matches!(
            verify_password("not it", &hash),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn malformed_hash_reads_as_invalid_credentials() {
        assert!(matches!(
            verify_password("anything", "not-a-bcrypt-hash"),
            Err(AuthError::InvalidCredentials)
        ));
    }

    #[test]
    fn production_cost_factor_is_ten() {
        assert_eq!(BCRYPT_COST, 10);
    }
}

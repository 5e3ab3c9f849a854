//! Admin authentication service.
//!
//! Same credential check as the storefront plus the `isAdmin` gate. There
//! is no admin signup; accounts are promoted through the CLI.

mod error;

pub use error::AuthError;

use mongodb::Database;

use phone_dokan_core::Email;

use crate::db::users::UserRepository;
use crate::models::CurrentAdmin;

/// Admin authentication service.
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

    /// Login with email and password; the account must be an admin.
    ///
    /// Unknown email, wrong password, and a non-admin account all fail with
    /// the same `InvalidCredentials` error.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` on any failed check.
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentAdmin, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .users
            .get_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        match bcrypt::verify(password, &user.password) {
            Ok(true) => {}
            Ok(false) | Err(_) => return Err(AuthError::InvalidCredentials),
        }

        if !user.is_admin {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(CurrentAdmin {
            id: user.user_id(),
            name: user.username.clone(),
            email,
        })
    }
}

//! Authentication error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format at signup.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] phone_dokan_core::EmailError),

    /// A required signup field is missing or empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// Invalid credentials. Deliberately covers both the unknown-email and
    /// wrong-password paths so the two are externally indistinguishable.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Email already registered.
    #[error("email already exists")]
    UserAlreadyExists,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}

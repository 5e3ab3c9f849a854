//! User repository for signup and login.

use bson::doc;
use mongodb::{Collection, Database};

use phone_dokan_core::{Email, UserId};

use super::{RepositoryError, USERS_COLLECTION, is_duplicate_key};
use crate::models::User;

/// Repository over the `users` collection.
pub struct UserRepository {
    collection: Collection<User>,
}

impl UserRepository {
    /// Create a new user repository.
    #[must_use]
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection(USERS_COLLECTION),
        }
    }

    /// Get a user by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?)
    }

    /// Create a new user with a hashed password.
    ///
    /// The caller is expected to have checked the email beforehand; this
    /// still maps a unique-index race to `Conflict` rather than a generic
    /// database error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    /// Returns `RepositoryError::DataCorruption` if the inserted id has an
    /// unexpected type.
    pub async fn create(
        &self,
        username: &str,
        email: &Email,
        password_hash: &str,
    ) -> Result<UserId, RepositoryError> {
        let user = User {
            id: None,
            username: username.to_owned(),
            email: email.as_str().to_owned(),
            password: password_hash.to_owned(),
            is_verified: false,
            is_admin: false,
            forgot_password_token: None,
            forget_password_token_expire: None,
            verify_token: None,
        };

        let result = self.collection.insert_one(&user).await.map_err(|e| {
            if is_duplicate_key(&e) {
                return RepositoryError::Conflict("email already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        let oid = result.inserted_id.as_object_id().ok_or_else(|| {
            RepositoryError::DataCorruption("inserted user id is not an ObjectId".to_owned())
        })?;

        Ok(UserId::new(oid.to_hex()))
    }
}

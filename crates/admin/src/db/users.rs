//! User lookup for admin login.

use bson::doc;
use mongodb::{Collection, Database};

use phone_dokan_core::Email;

use super::{RepositoryError, USERS_COLLECTION};
use crate::models::AdminUser;

/// Read-only repository over the `users` collection.
///
/// The admin tool never creates users; signup lives on the storefront and
/// promotion to admin happens through the CLI.
pub struct UserRepository {
    collection: Collection<AdminUser>,
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
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        Ok(self
            .collection
            .find_one(doc! { "email": email.as_str() })
            .await?)
    }
}

//! Database operations for the admin tool.
//!
//! # Collections
//!
//! - `products` - Catalog documents, written here, read by the storefront
//! - `users` - Looked up at admin login (`isAdmin` must be set)
//!
//! The admin tool shares the storefront's database; it is the write side of
//! the same two collections.

pub mod products;
pub mod users;

use mongodb::{Client, Database};
use secrecy::ExposeSecret;
use thiserror::Error;

pub use products::ProductRepository;
pub use users::UserRepository;

/// Collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

/// Collection holding user documents.
pub const USERS_COLLECTION: &str = "users";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from the MongoDB driver.
    #[error("database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested document was not found.
    #[error("not found")]
    NotFound,
}

/// Connect to MongoDB and select the application database.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if the URI cannot be parsed or the
/// client cannot be initialized.
pub async fn connect(
    database_url: &secrecy::SecretString,
    database_name: &str,
) -> Result<Database, mongodb::error::Error> {
    let client = Client::with_uri_str(database_url.expose_secret()).await?;
    Ok(client.database(database_name))
}

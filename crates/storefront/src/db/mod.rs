//! Database operations for the storefront.
//!
//! # Collections
//!
//! - `products` - Catalog documents, written by the admin tool, read here
//! - `users` - Site authentication (signup/login)
//!
//! One `mongodb::Client` is created at startup and reused for every request;
//! there are no migrations and no versioning scheme for the collections.

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

    /// An identifier that is not a valid ObjectId hex string.
    #[error("invalid id: {0}")]
    InvalidId(String),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested document was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Connect to MongoDB and select the application database.
///
/// The returned handle is cheap to clone and is shared across all request
/// handlers for the lifetime of the process.
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

/// Create the indexes the application relies on.
///
/// The unique index on `users.email` is what turns a duplicate-signup race
/// into a conflict instead of a second document; the `products.slug` index
/// backs by-slug lookups. Intentionally idempotent, run at every boot -
/// there is no migration tooling for these collections.
///
/// # Errors
///
/// Returns `mongodb::error::Error` if index creation fails.
pub async fn ensure_indexes(db: &Database) -> Result<(), mongodb::error::Error> {
    use bson::doc;
    use mongodb::IndexModel;
    use mongodb::options::IndexOptions;

    let email_unique = IndexModel::builder()
        .keys(doc! { "email": 1 })
        .options(IndexOptions::builder().unique(true).build())
        .build();
    db.collection::<bson::Document>(USERS_COLLECTION)
        .create_index(email_unique)
        .await?;

    let slug_lookup = IndexModel::builder().keys(doc! { "slug": 1 }).build();
    db.collection::<bson::Document>(PRODUCTS_COLLECTION)
        .create_index(slug_lookup)
        .await?;

    Ok(())
}

/// True if the error is a MongoDB unique-index violation (code 11000).
pub(crate) fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    use mongodb::error::{ErrorKind, WriteFailure};

    matches!(
        &*err.kind,
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == 11000
    )
}

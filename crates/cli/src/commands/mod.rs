//! CLI command implementations.

pub mod admin;
pub mod seed;

use mongodb::{Client, Database};
use secrecy::{ExposeSecret, SecretString};

/// Connect to MongoDB using `MONGODB_URI` / `MONGODB_DATABASE`.
///
/// Loads a `.env` file if present, same as the service binaries.
pub(crate) async fn connect_from_env() -> Result<Database, Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    let uri = SecretString::from(
        std::env::var("MONGODB_URI").map_err(|_| "MONGODB_URI must be set")?,
    );
    let database_name =
        std::env::var("MONGODB_DATABASE").unwrap_or_else(|_| "phone_dokan".to_string());

    let client = Client::with_uri_str(uri.expose_secret()).await?;
    Ok(client.database(&database_name))
}

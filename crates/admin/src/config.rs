//! Admin configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `MONGODB_URI` - MongoDB connection string (may contain credentials)
//! - `ASSET_CDN_PRIVATE_KEY` - Private API key for the image CDN
//!
//! ## Optional
//! - `MONGODB_DATABASE` - Database name (default: `phone_dokan`)
//! - `ADMIN_HOST` - Bind address (default: 127.0.0.1)
//! - `ADMIN_PORT` - Listen port (default: 3001)
//! - `ADMIN_BASE_URL` - Public URL (default: `http://localhost:3001`)
//! - `ASSET_CDN_UPLOAD_URL` - CDN upload endpoint (default: ImageKit)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag

use std::net::{IpAddr, SocketAddr};

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

/// Default upload endpoint (ImageKit-compatible).
const DEFAULT_UPLOAD_URL: &str = "https://upload.imagekit.io/api/v1/files/upload";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Admin application configuration.
#[derive(Debug, Clone)]
pub struct AdminConfig {
    /// MongoDB connection URI (contains credentials)
    pub database_url: SecretString,
    /// Database name holding the `users` and `products` collections
    pub database_name: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the admin tool
    pub base_url: String,
    /// Image CDN configuration
    pub asset_cdn: AssetCdnConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment tag
    pub sentry_environment: Option<String>,
}

/// Image CDN configuration.
#[derive(Debug, Clone)]
pub struct AssetCdnConfig {
    /// Upload endpoint the raw bytes are forwarded to
    pub upload_url: String,
    /// Private API key (sent as HTTP basic auth username)
    pub private_key: SecretString,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_secret("MONGODB_URI")?;
        let database_name = get_env_or_default("MONGODB_DATABASE", "phone_dokan");
        let host = get_env_or_default("ADMIN_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("ADMIN_PORT", "3001")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("ADMIN_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("ADMIN_BASE_URL", "http://localhost:3001");
        let asset_cdn = AssetCdnConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");

        Ok(Self {
            database_url,
            database_name,
            host,
            port,
            base_url,
            asset_cdn,
            sentry_dsn,
            sentry_environment,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AssetCdnConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let upload_url = get_env_or_default("ASSET_CDN_UPLOAD_URL", DEFAULT_UPLOAD_URL);

        // Fail at boot on an unparseable endpoint, not on the first upload
        Url::parse(&upload_url).map_err(|e| {
            ConfigError::InvalidEnvVar("ASSET_CDN_UPLOAD_URL".to_string(), e.to_string())
        })?;

        Ok(Self {
            upload_url,
            private_key: get_secret("ASSET_CDN_PRIVATE_KEY")?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Get an optional environment variable, treating empty values as unset.
fn get_optional_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Get a required environment variable wrapped in `SecretString`.
fn get_secret(name: &str) -> Result<SecretString, ConfigError> {
    get_required_env(name).map(SecretString::from)
}

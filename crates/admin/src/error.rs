//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers return `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::assets::AssetError;
use crate::services::auth::AuthError;

/// Application-level error type for the admin tool.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Asset CDN operation failed.
    #[error("Asset error: {0}")]
    Assets(#[from] AssetError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(
            self,
            Self::Database(_)
                | Self::Internal(_)
                | Self::Assets(AssetError::Http(_) | AssetError::Cdn(_))
                | Self::Auth(AuthError::Repository(_))
        ) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Assets(err) => match err {
                AssetError::MissingFile
                | AssetError::MissingFileName
                | AssetError::InvalidBase64 => StatusCode::BAD_REQUEST,
                AssetError::Http(_) | AssetError::Cdn(_) => StatusCode::BAD_GATEWAY,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_owned(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Invalid credentials".to_owned(),
                AuthError::Repository(_) => "Internal server error".to_owned(),
            },
            Self::Assets(err) => match err {
                AssetError::MissingFile | AssetError::MissingFileName => {
                    "Missing file or fileName".to_owned()
                }
                AssetError::InvalidBase64 => err.to_string(),
                AssetError::Http(_) | AssetError::Cdn(_) => "External service error".to_owned(),
            },
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn get_status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn missing_upload_fields_are_client_errors() {
        assert_eq!(
            get_status(AppError::Assets(AssetError::MissingFile)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Assets(AssetError::MissingFileName)),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn cdn_failures_surface_as_bad_gateway() {
        assert_eq!(
            get_status(AppError::Assets(AssetError::Cdn(500))),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn admin_login_failure_is_unauthorized() {
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
    }
}

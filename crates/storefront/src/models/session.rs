//! Session-related types.
//!
//! Types stored in the session for authentication state.

use serde::{Deserialize, Serialize};

use phone_dokan_core::{Email, UserId};

/// The authenticated principal stored in the session.
///
/// Handlers that need the logged-in user receive this value through an
/// extractor; none of them reach into global auth state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principal {
    /// User's document ID.
    pub id: UserId,
    /// Display name (the username chosen at signup).
    pub name: String,
    /// User's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";
}

//! Session-related types.

use serde::{Deserialize, Serialize};

use phone_dokan_core::{Email, UserId};

/// The authenticated admin stored in the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's user document ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Admin's email address.
    pub email: Email,
}

/// Session keys for authentication data.
pub mod session_keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";
}

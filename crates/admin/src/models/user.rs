//! User projection for admin login.

use bson::oid::ObjectId;
use serde::Deserialize;

use phone_dokan_core::UserId;

/// The slice of a user document the admin login needs.
///
/// Unknown fields on the stored document are ignored; only the credential
/// check and the `isAdmin` gate read anything here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUser {
    #[serde(rename = "_id")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_admin: bool,
}

impl AdminUser {
    /// The document id as a hex `UserId`.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.id
            .as_ref()
            .map_or_else(|| UserId::new(""), |oid| UserId::new(oid.to_hex()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_fields_it_does_not_need() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "username": "karim",
            "email": "karim@example.com",
            "password": "$2b$10$abcdefghijklmnopqrstuv",
            "isAdmin": true,
            "isVerified": false,
            "verifyToken": "tok",
        };

        let user: AdminUser = bson::from_document(doc).expect("deserialize");
        assert!(user.is_admin);
        assert_eq!(user.username, "karim");
    }

    #[test]
    fn is_admin_defaults_to_false() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "username": "karim",
            "email": "karim@example.com",
            "password": "hash",
        };

        let user: AdminUser = bson::from_document(doc).expect("deserialize");
        assert!(!user.is_admin);
    }
}

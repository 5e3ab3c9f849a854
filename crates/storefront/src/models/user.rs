//! User document for the `users` collection.

use bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use phone_dokan_core::UserId;

/// A user document.
///
/// `password` holds the bcrypt hash, never plaintext. The token fields are
/// reserved for the password-reset flow; nothing in scope writes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forgot_password_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forget_password_token_expire: Option<bson::DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verify_token: Option<String>,
}

impl User {
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
    fn reserved_token_fields_stay_optional() {
        let doc = bson::doc! {
            "_id": ObjectId::new(),
            "username": "rahim",
            "email": "rahim@example.com",
            "password": "$2b$10$abcdefghijklmnopqrstuv",
        };

        let user: User = bson::from_document(doc).expect("deserialize");
        assert!(!user.is_verified);
        assert!(!user.is_admin);
        assert!(user.forgot_password_token.is_none());
        assert!(user.verify_token.is_none());
    }

    #[test]
    fn serializes_with_original_field_names() {
        let user = User {
            id: None,
            username: "rahim".to_owned(),
            email: "rahim@example.com".to_owned(),
            password: "hash".to_owned(),
            is_verified: false,
            is_admin: true,
            forgot_password_token: None,
            forget_password_token_expire: None,
            verify_token: None,
        };

        let json = serde_json::to_value(&user).expect("serialize");
        assert_eq!(json["isAdmin"], true);
        assert_eq!(json["isVerified"], false);
        assert!(json.get("forgotPasswordToken").is_none());
    }
}

//! Admin account management.

use bson::doc;

/// bcrypt cost factor, matching the storefront signup path.
const BCRYPT_COST: u32 = 10;

/// Create an admin user, or promote an existing account to admin.
///
/// Signup happens on the storefront; this is the only way an account gains
/// `isAdmin`. For an existing email the password argument is ignored and
/// the account is promoted in place.
///
/// # Errors
///
/// Returns an error if the database is unreachable or hashing fails.
pub async fn create_user(
    email: &str,
    name: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = phone_dokan_core::Email::parse(email)?;
    let db = super::connect_from_env().await?;
    let users = db.collection::<bson::Document>("users");

    if let Some(existing) = users.find_one(doc! { "email": email.as_str() }).await? {
        if existing.get_bool("isAdmin").unwrap_or(false) {
            tracing::info!(email = %email, "Account is already an admin");
            return Ok(());
        }

        users
            .update_one(
                doc! { "email": email.as_str() },
                doc! { "$set": { "isAdmin": true } },
            )
            .await?;
        tracing::info!(email = %email, "Promoted existing account to admin");
        return Ok(());
    }

    let password_hash = bcrypt::hash(password, BCRYPT_COST)?;

    users
        .insert_one(doc! {
            "username": name,
            "email": email.as_str(),
            "password": password_hash,
            "isVerified": false,
            "isAdmin": true,
        })
        .await?;

    tracing::info!(email = %email, "Created admin account");
    Ok(())
}

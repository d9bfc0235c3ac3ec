//! First-user bootstrap.
//!
//! A fresh database has no back-office user, so nobody could log in to
//! create one. On startup the server seeds an admin from `ADMIN_EMAIL` /
//! `ADMIN_PASSWORD` when, and only when, the `users` table is empty.

use sava_db::models::user::{CreateUser, User};
use sava_db::UserStore;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};

/// Role given to the bootstrapped user.
pub const ADMIN_ROLE: &str = "admin";

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Weak admin password: {0}")]
    WeakPassword(String),

    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Create the first admin if no user exists yet.
///
/// Returns the created user, or `None` when users already exist.
pub async fn ensure_admin(
    store: &dyn UserStore,
    email: &str,
    password: &str,
) -> Result<Option<User>, BootstrapError> {
    if store.count_users().await? > 0 {
        tracing::debug!("Users exist, skipping admin bootstrap");
        return Ok(None);
    }

    validate_password_strength(password, MIN_PASSWORD_LENGTH)
        .map_err(BootstrapError::WeakPassword)?;
    let password_hash = hash_password(password).map_err(|e| BootstrapError::Hash(e.to_string()))?;

    let user = store
        .create_user(&CreateUser {
            email: email.trim().to_lowercase(),
            password_hash,
            role: ADMIN_ROLE.to_string(),
        })
        .await?;

    tracing::info!(user_id = user.id, email = %user.email, "Bootstrapped first admin user");
    Ok(Some(user))
}

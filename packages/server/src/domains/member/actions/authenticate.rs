//! Authenticate action - email + password login

use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::common::utils::verify_password;
use crate::domains::member::models::UserProfile;

/// Check credentials and return the matching account.
///
/// Returns `None` for an unknown email or a wrong password; callers must not
/// reveal which one it was.
pub async fn authenticate(email: &str, password: &str, pool: &PgPool) -> Result<Option<UserProfile>> {
    let Some(account) = UserProfile::find_by_email(email, pool).await? else {
        debug!("Login attempt for unknown email");
        return Ok(None);
    };

    if !verify_password(password, &account.password_hash) {
        debug!(user_id = %account.id, "Login attempt with wrong password");
        return Ok(None);
    }

    info!(user_id = %account.id, "Account logged in");
    Ok(Some(account))
}

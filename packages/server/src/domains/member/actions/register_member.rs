//! Register member action - creates a volunteer account

use sqlx::PgPool;
use thiserror::Error;
use tracing::{error, info};

use crate::common::utils::make_password_hash;
use crate::domains::member::models::UserProfile;

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Error, Debug)]
pub enum RegisterError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Password is too short")]
    PasswordTooShort,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Register a new volunteer account.
///
/// New accounts are never administrators and belong to no organization;
/// memberships are granted separately.
pub async fn register_member(
    email: &str,
    password: &str,
    pool: &PgPool,
) -> Result<UserProfile, RegisterError> {
    let email = email.trim();
    if !validator::validate_email(email) {
        return Err(RegisterError::InvalidEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(RegisterError::PasswordTooShort);
    }

    if UserProfile::find_by_email(email, pool).await?.is_some() {
        return Err(RegisterError::EmailTaken);
    }

    let password_hash = make_password_hash(password)?;
    let created = UserProfile::create(email, &password_hash, false, pool)
        .await
        .map_err(|e| {
            error!("Failed to insert account: {}", e);
            e
        })?;

    info!(user_id = %created.id, "Account registered");
    Ok(created)
}

use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::common::{OrganizationId, Role, UserId};

/// UserProfile model - an account and its domain-level flags
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserProfile {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub is_administrator: bool,
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Find account by ID
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM user_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Find account by email (case-insensitive)
    pub async fn find_by_email(email: &str, pool: &PgPool) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>("SELECT * FROM user_profiles WHERE LOWER(email) = LOWER($1)")
            .bind(email.trim())
            .fetch_optional(pool)
            .await
            .map_err(Into::into)
    }

    /// Insert new account with an already hashed password
    pub async fn create(
        email: &str,
        password_hash: &str,
        is_administrator: bool,
        pool: &PgPool,
    ) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            "INSERT INTO user_profiles (email, password_hash, is_administrator)
             VALUES ($1, $2, $3)
             RETURNING *",
        )
        .bind(email.trim())
        .bind(password_hash)
        .bind(is_administrator)
        .fetch_one(pool)
        .await
        .map_err(Into::into)
    }

    /// IDs of the organizations this account is a member of
    pub async fn organization_ids(id: UserId, pool: &PgPool) -> Result<Vec<OrganizationId>> {
        sqlx::query_scalar::<_, OrganizationId>(
            "SELECT organization_id FROM organization_members
             WHERE user_id = $1
             ORDER BY organization_id",
        )
        .bind(id)
        .fetch_all(pool)
        .await
        .map_err(Into::into)
    }

    /// Resolve the explicit role of this account
    pub async fn role(&self, pool: &PgPool) -> Result<Role> {
        if self.is_administrator {
            return Ok(Role::Administrator);
        }
        let organizations = Self::organization_ids(self.id, pool).await?;
        Ok(Role::for_account(false, organizations))
    }
}

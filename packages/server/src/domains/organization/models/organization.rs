use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{OrganizationId, UserId};

/// Organization - owner of offers, acted for by its member accounts
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Organization {
    pub id: OrganizationId,
    pub name: String,
    pub address: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Organization {
    /// Find organization by ID
    pub async fn find_by_id(id: OrganizationId, pool: &PgPool) -> Result<Option<Self>> {
        let org = sqlx::query_as::<_, Organization>("SELECT * FROM organizations WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(org)
    }

    /// All organizations, oldest first
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        let orgs = sqlx::query_as::<_, Organization>("SELECT * FROM organizations ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(orgs)
    }

    /// Organizations the given account is a member of
    pub async fn find_for_member(user_id: UserId, pool: &PgPool) -> Result<Vec<Self>> {
        let orgs = sqlx::query_as::<_, Organization>(
            r#"
            SELECT o.* FROM organizations o
            JOIN organization_members m ON m.organization_id = o.id
            WHERE m.user_id = $1
            ORDER BY o.id
            "#,
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(orgs)
    }

    /// Insert new organization
    pub async fn create(
        name: &str,
        address: &str,
        description: &str,
        pool: &PgPool,
    ) -> Result<Self> {
        let org = sqlx::query_as::<_, Organization>(
            r#"
            INSERT INTO organizations (name, address, description)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(name)
        .bind(address)
        .bind(description)
        .fetch_one(pool)
        .await?;
        Ok(org)
    }

    /// Add an account to the organization's members (idempotent)
    pub async fn add_member(id: OrganizationId, user_id: UserId, pool: &PgPool) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO organization_members (organization_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }
}

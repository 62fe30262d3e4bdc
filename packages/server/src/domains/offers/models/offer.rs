use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use typed_builder::TypedBuilder;

use super::status::{ActionStatus, LegacyStatus, OfferStatus, RecruitmentStatus};
use crate::common::utils::slugify;
use crate::common::{OfferId, OrganizationId, Role};

/// Offer - a volunteering opportunity owned by exactly one organization
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Offer {
    pub id: OfferId,
    pub organization_id: OrganizationId,

    // Content
    pub title: String,
    pub description: String,
    pub requirements: String,
    pub time_commitment: String,
    pub benefits: String,
    pub location: String,
    pub time_period: String,

    pub started_at: Option<DateTime<Utc>>,
    pub finished_at: Option<DateTime<Utc>>,

    // Lifecycle
    pub status_old: LegacyStatus,
    pub offer_status: OfferStatus,
    pub recruitment_status: RecruitmentStatus,
    pub action_status: ActionStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Editable content of an offer, shared by creation and full edits
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OfferContent {
    pub organization_id: OrganizationId,
    #[builder(setter(into))]
    pub title: String,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default, setter(into))]
    pub requirements: String,
    #[builder(default, setter(into))]
    pub time_commitment: String,
    #[builder(default, setter(into))]
    pub benefits: String,
    #[builder(default, setter(into))]
    pub location: String,
    #[builder(default, setter(into))]
    pub time_period: String,
    #[builder(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[builder(default)]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Initial lifecycle of a new offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, TypedBuilder)]
pub struct OfferLifecycle {
    #[builder(default = LegacyStatus::New)]
    pub status_old: LegacyStatus,
    #[builder(default = OfferStatus::Unpublished)]
    pub offer_status: OfferStatus,
    #[builder(default = RecruitmentStatus::Open)]
    pub recruitment_status: RecruitmentStatus,
    #[builder(default = ActionStatus::Ongoing)]
    pub action_status: ActionStatus,
}

impl Default for OfferLifecycle {
    fn default() -> Self {
        Self::builder().build()
    }
}

// =============================================================================
// Derived values
// =============================================================================

impl Offer {
    /// URL slug derived from the title; never stored.
    ///
    /// Slugs that would land on a moderation route get an `-offer` suffix.
    pub fn slug(&self) -> String {
        let slug = slugify(&self.title);
        match slug.as_str() {
            "" => "offer".to_string(),
            "delete" | "accept" => format!("{}-offer", slug),
            _ => slug,
        }
    }

    /// Canonical detail URL
    pub fn url(&self) -> String {
        format!("/offers/{}/{}", self.slug(), self.id)
    }

    pub fn edit_url(&self) -> String {
        format!("{}/edit", self.url())
    }

    pub fn join_url(&self) -> String {
        format!("{}/join", self.url())
    }

    /// Whether the offer appears in the listing for the given role
    pub fn is_visible_to(&self, role: &Role) -> bool {
        role.is_admin() || self.offer_status == OfferStatus::Published
    }

    /// Published, closed for recruitment and finished
    pub fn is_archived(&self) -> bool {
        self.offer_status == OfferStatus::Published
            && self.recruitment_status == RecruitmentStatus::Closed
            && self.action_status == ActionStatus::Finished
    }
}

// =============================================================================
// SQL Queries - ALL queries must be in models/
// =============================================================================

impl Offer {
    /// Find offer by ID
    pub async fn find_by_id(id: OfferId, pool: &PgPool) -> Result<Option<Self>> {
        let offer = sqlx::query_as::<_, Offer>("SELECT * FROM offers WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(offer)
    }

    /// Offers listed for the given role, in insertion order.
    ///
    /// Must agree with [`Offer::is_visible_to`].
    pub async fn find_visible(role: &Role, pool: &PgPool) -> Result<Vec<Self>> {
        let offers = sqlx::query_as::<_, Offer>(
            r#"
            SELECT * FROM offers
            WHERE $1 OR offer_status = $2
            ORDER BY id
            "#,
        )
        .bind(role.is_admin())
        .bind(OfferStatus::Published)
        .fetch_all(pool)
        .await?;
        Ok(offers)
    }

    /// Archived offers, in insertion order.
    ///
    /// Must agree with [`Offer::is_archived`].
    pub async fn find_archived(pool: &PgPool) -> Result<Vec<Self>> {
        let offers = sqlx::query_as::<_, Offer>(
            r#"
            SELECT * FROM offers
            WHERE offer_status = $1
              AND recruitment_status = $2
              AND action_status = $3
            ORDER BY id
            "#,
        )
        .bind(OfferStatus::Published)
        .bind(RecruitmentStatus::Closed)
        .bind(ActionStatus::Finished)
        .fetch_all(pool)
        .await?;
        Ok(offers)
    }

    /// Insert new offer
    pub async fn create(
        content: &OfferContent,
        lifecycle: OfferLifecycle,
        pool: &PgPool,
    ) -> Result<Self> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            INSERT INTO offers (
                organization_id, title, description, requirements, time_commitment,
                benefits, location, time_period, started_at, finished_at,
                status_old, offer_status, recruitment_status, action_status
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING *
            "#,
        )
        .bind(content.organization_id)
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.requirements)
        .bind(&content.time_commitment)
        .bind(&content.benefits)
        .bind(&content.location)
        .bind(&content.time_period)
        .bind(content.started_at)
        .bind(content.finished_at)
        .bind(lifecycle.status_old)
        .bind(lifecycle.offer_status)
        .bind(lifecycle.recruitment_status)
        .bind(lifecycle.action_status)
        .fetch_one(pool)
        .await?;
        Ok(offer)
    }

    /// Rewrite all editable content (full edit)
    pub async fn update_content(
        id: OfferId,
        content: &OfferContent,
        action_status: ActionStatus,
        pool: &PgPool,
    ) -> Result<Self> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET organization_id = $2,
                title = $3,
                description = $4,
                requirements = $5,
                time_commitment = $6,
                benefits = $7,
                location = $8,
                time_period = $9,
                started_at = $10,
                finished_at = $11,
                action_status = $12,
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(content.organization_id)
        .bind(&content.title)
        .bind(&content.description)
        .bind(&content.requirements)
        .bind(&content.time_commitment)
        .bind(&content.benefits)
        .bind(&content.location)
        .bind(&content.time_period)
        .bind(content.started_at)
        .bind(content.finished_at)
        .bind(action_status)
        .fetch_one(pool)
        .await?;
        Ok(offer)
    }

    /// Set only the legacy status field
    pub async fn set_legacy_status(id: OfferId, status: LegacyStatus, pool: &PgPool) -> Result<Self> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET status_old = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;
        Ok(offer)
    }

    /// Accept an offer: mark it active and publish it
    pub async fn accept(id: OfferId, pool: &PgPool) -> Result<Option<Self>> {
        let offer = sqlx::query_as::<_, Offer>(
            r#"
            UPDATE offers
            SET status_old = $2, offer_status = $3, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(LegacyStatus::Active)
        .bind(OfferStatus::Published)
        .fetch_optional(pool)
        .await?;
        Ok(offer)
    }

    /// Hard delete; join rows cascade. Returns false if no such offer.
    pub async fn delete(id: OfferId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query("DELETE FROM offers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

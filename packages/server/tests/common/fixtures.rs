//! Test fixtures for creating test data.
//!
//! Every fixture writes through the model methods, so each test builds
//! exactly the entities it needs in its own database.

use anyhow::Result;
use chrono::{DateTime, Utc};
use server_core::common::utils::make_password_hash;
use server_core::common::{OfferId, OrganizationId};
use server_core::domains::member::models::UserProfile;
use server_core::domains::offers::models::{
    ActionStatus, Offer, OfferContent, OfferLifecycle, OfferStatus, RecruitmentStatus,
};
use server_core::domains::organization::models::Organization;
use sqlx::PgPool;
use typed_builder::TypedBuilder;

/// Password used by every fixture account
pub const PASSWORD: &str = "123volunteer";

pub async fn create_account(pool: &PgPool, email: &str, is_administrator: bool) -> Result<UserProfile> {
    let hash = make_password_hash(PASSWORD)?;
    UserProfile::create(email, &hash, is_administrator, pool).await
}

pub async fn create_volunteer(pool: &PgPool) -> Result<UserProfile> {
    create_account(pool, "volunteer@example.com", false).await
}

pub async fn create_admin(pool: &PgPool) -> Result<UserProfile> {
    create_account(pool, "admin@example.com", true).await
}

pub async fn create_organization(pool: &PgPool, name: &str) -> Result<Organization> {
    Organization::create(name, "Test address", "Organization description", pool).await
}

/// Account that is a member of `organization_id`
pub async fn create_organization_member(
    pool: &PgPool,
    email: &str,
    organization_id: OrganizationId,
) -> Result<UserProfile> {
    let account = create_account(pool, email, false).await?;
    Organization::add_member(organization_id, account.id, pool).await?;
    Ok(account)
}

/// Offer builder with the field values the offer pages are tested with
#[derive(TypedBuilder)]
pub struct OfferFixture {
    organization_id: OrganizationId,
    #[builder(default = "volontulo offer".to_string(), setter(into))]
    title: String,
    #[builder(default)]
    lifecycle: OfferLifecycle,
    #[builder(default, setter(strip_option))]
    started_at: Option<DateTime<Utc>>,
    #[builder(default, setter(strip_option))]
    finished_at: Option<DateTime<Utc>>,
}

impl OfferFixture {
    pub async fn create(self, pool: &PgPool) -> Result<Offer> {
        let content = OfferContent::builder()
            .organization_id(self.organization_id)
            .title(self.title)
            .description("required description")
            .requirements("required requirements")
            .time_commitment("required time_commitment")
            .benefits("required benefits")
            .location("required location")
            .time_period("required time_period")
            .started_at(self.started_at)
            .finished_at(self.finished_at)
            .build();
        Offer::create(&content, self.lifecycle, pool).await
    }
}

/// Unpublished offer with default content
pub async fn create_offer(pool: &PgPool, organization_id: OrganizationId) -> Result<Offer> {
    OfferFixture::builder()
        .organization_id(organization_id)
        .build()
        .create(pool)
        .await
}

/// Published, open, ongoing offer
pub async fn create_published_offer(pool: &PgPool, organization_id: OrganizationId) -> Result<Offer> {
    OfferFixture::builder()
        .organization_id(organization_id)
        .lifecycle(
            OfferLifecycle::builder()
                .offer_status(OfferStatus::Published)
                .build(),
        )
        .build()
        .create(pool)
        .await
}

/// Published, closed and finished offer
pub async fn create_archived_offer(
    pool: &PgPool,
    organization_id: OrganizationId,
    title: &str,
) -> Result<Offer> {
    OfferFixture::builder()
        .organization_id(organization_id)
        .title(title)
        .lifecycle(
            OfferLifecycle::builder()
                .offer_status(OfferStatus::Published)
                .recruitment_status(RecruitmentStatus::Closed)
                .action_status(ActionStatus::Finished)
                .build(),
        )
        .build()
        .create(pool)
        .await
}

pub async fn reload_offer(pool: &PgPool, id: OfferId) -> Result<Option<Offer>> {
    Offer::find_by_id(id, pool).await
}

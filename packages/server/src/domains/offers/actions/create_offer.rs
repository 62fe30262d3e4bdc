//! Create offer action

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};

use super::OfferError;
use crate::common::{Actor, AuthError, OfferAction, Role};
use crate::domains::offers::data::{FormErrors, OfferForm, INVALID_CHOICE};
use crate::domains::offers::models::{ActionStatus, Offer, OfferLifecycle};
use crate::domains::organization::models::Organization;

/// Create an offer from a submitted form.
///
/// New offers start as `NEW` / unpublished / open; the action status is
/// derived from the end date. Picking an organization the requester does not
/// belong to is reported as a form error on that field.
pub async fn create_offer(role: &Role, form: &OfferForm, pool: &PgPool) -> Result<Offer, OfferError> {
    Actor::new(role).can(OfferAction::Create).check()?;

    let content = form.content()?;

    match Actor::new(role)
        .can(OfferAction::Create)
        .on(content.organization_id)
        .check()
    {
        Ok(()) => {}
        Err(AuthError::PermissionDenied(reason)) => {
            warn!(organization_id = %content.organization_id, %reason, "Offer creation for foreign organization");
            return Err(FormErrors::single("organization", INVALID_CHOICE).into());
        }
        Err(e) => return Err(e.into()),
    }

    if Organization::find_by_id(content.organization_id, pool).await?.is_none() {
        return Err(FormErrors::single("organization", INVALID_CHOICE).into());
    }

    let lifecycle = OfferLifecycle::builder()
        .action_status(ActionStatus::from_dates(content.finished_at, Utc::now()))
        .build();

    let offer = Offer::create(&content, lifecycle, pool).await?;
    info!(offer_id = %offer.id, organization_id = %offer.organization_id, "Offer created");

    Ok(offer)
}

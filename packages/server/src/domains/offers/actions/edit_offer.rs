//! Edit offer action - full edit or status-only edit

use chrono::Utc;
use sqlx::PgPool;
use tracing::{info, warn};

use super::OfferError;
use crate::common::{Actor, OfferAction, Role};
use crate::domains::offers::data::{EditType, FormErrors, OfferForm, INVALID_CHOICE};
use crate::domains::offers::models::{ActionStatus, Offer};

/// What an accepted edit submission did
#[derive(Debug)]
pub enum EditOutcome {
    /// Full edit applied
    Updated(Offer),
    /// Legacy status changed by an administrator
    StatusChanged(Offer),
    /// Status change attempted by a non-administrator; nothing was written
    StatusChangeDenied,
}

/// Apply an edit-form submission to an existing offer.
///
/// The requester must be allowed to edit the offer at all; beyond that the
/// `edit_type` field selects the mode. Validation failures leave the stored
/// record untouched.
pub async fn edit_offer(
    role: &Role,
    offer: &Offer,
    form: &OfferForm,
    pool: &PgPool,
) -> Result<EditOutcome, OfferError> {
    Actor::new(role)
        .can(OfferAction::Edit)
        .on(offer.organization_id)
        .check()?;

    match form.edit_type()? {
        EditType::FullEdit => full_edit(role, offer, form, pool).await,
        EditType::StatusChange => status_change(role, offer, form, pool).await,
    }
}

async fn full_edit(
    role: &Role,
    offer: &Offer,
    form: &OfferForm,
    pool: &PgPool,
) -> Result<EditOutcome, OfferError> {
    let content = form.content()?;

    // Moving an offer to another organization needs membership there too
    if content.organization_id != offer.organization_id
        && Actor::new(role)
            .can(OfferAction::Edit)
            .on(content.organization_id)
            .check()
            .is_err()
    {
        warn!(offer_id = %offer.id, organization_id = %content.organization_id, "Offer moved to foreign organization");
        return Err(FormErrors::single("organization", INVALID_CHOICE).into());
    }

    let action_status = if content.finished_at == offer.finished_at {
        offer.action_status
    } else {
        ActionStatus::from_dates(content.finished_at, Utc::now())
    };

    let updated = Offer::update_content(offer.id, &content, action_status, pool).await?;
    info!(offer_id = %updated.id, "Offer content updated");

    Ok(EditOutcome::Updated(updated))
}

async fn status_change(
    role: &Role,
    offer: &Offer,
    form: &OfferForm,
    pool: &PgPool,
) -> Result<EditOutcome, OfferError> {
    if let Err(e) = Actor::new(role)
        .can(OfferAction::ChangeStatus)
        .on(offer.organization_id)
        .check()
    {
        info!(offer_id = %offer.id, reason = %e, "Status change refused");
        return Ok(EditOutcome::StatusChangeDenied);
    }

    let status = form.legacy_status()?;
    let updated = Offer::set_legacy_status(offer.id, status, pool).await?;
    info!(offer_id = %updated.id, status = %status, "Offer status changed");

    Ok(EditOutcome::StatusChanged(updated))
}

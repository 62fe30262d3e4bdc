//! Administrator moderation: delete and accept

use sqlx::PgPool;
use tracing::info;

use super::OfferError;
use crate::common::{Actor, OfferAction, OfferId, Role};
use crate::domains::offers::models::Offer;

/// Hard-delete an offer.
///
/// The gate runs before the lookup, so non-administrators are refused even
/// for ids that do not exist.
pub async fn delete_offer(role: &Role, id: OfferId, pool: &PgPool) -> Result<(), OfferError> {
    Actor::new(role).can(OfferAction::Delete).check()?;

    if !Offer::delete(id, pool).await? {
        return Err(OfferError::NotFound);
    }

    info!(offer_id = %id, "Offer deleted");
    Ok(())
}

/// Accept an offer: `status_old = ACTIVE`, `offer_status = published`
pub async fn accept_offer(role: &Role, id: OfferId, pool: &PgPool) -> Result<Offer, OfferError> {
    Actor::new(role).can(OfferAction::Accept).check()?;

    let offer = Offer::accept(id, pool).await?.ok_or(OfferError::NotFound)?;

    info!(offer_id = %offer.id, "Offer accepted");
    Ok(offer)
}

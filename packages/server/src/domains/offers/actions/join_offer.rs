//! Join offer action

use sqlx::PgPool;
use tracing::info;

use super::OfferError;
use crate::domains::member::models::UserProfile;
use crate::domains::offers::data::JoinApplication;
use crate::domains::offers::models::{Offer, OfferVolunteer};

/// Result of a valid join application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyJoined,
    /// Anonymous requester whose email belongs to an existing account
    LoginRequired,
    /// Anonymous requester with an unknown email
    RegistrationRequired,
}

/// Process a validated application.
///
/// Logged-in accounts are recorded as volunteers; the primary key on
/// `offer_volunteers` turns a repeated join into `AlreadyJoined`.
/// Anonymous requesters are routed to login or registration based on
/// the email they typed.
pub async fn join_offer(
    account: Option<&UserProfile>,
    offer: &Offer,
    application: &JoinApplication,
    pool: &PgPool,
) -> Result<JoinOutcome, OfferError> {
    let Some(account) = account else {
        let known = UserProfile::find_by_email(&application.email, pool)
            .await?
            .is_some();
        info!(offer_id = %offer.id, known_email = known, "Anonymous join attempt");
        return Ok(if known {
            JoinOutcome::LoginRequired
        } else {
            JoinOutcome::RegistrationRequired
        });
    };

    if !OfferVolunteer::add(offer.id, account.id, pool).await? {
        info!(offer_id = %offer.id, user_id = %account.id, "Offer already joined");
        return Ok(JoinOutcome::AlreadyJoined);
    }

    info!(offer_id = %offer.id, user_id = %account.id, "Volunteer joined offer");
    Ok(JoinOutcome::Joined)
}

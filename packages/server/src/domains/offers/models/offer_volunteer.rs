use anyhow::Result;
use sqlx::PgPool;

use crate::common::{OfferId, UserId};
use crate::domains::member::models::UserProfile;

/// Join relation between offers and volunteer accounts.
///
/// The (offer_id, user_id) primary key makes a second join a no-op.
pub struct OfferVolunteer;

impl OfferVolunteer {
    /// Record that an account joined an offer.
    ///
    /// Returns `false` if the account had already joined.
    pub async fn add(offer_id: OfferId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let result = sqlx::query(
            r#"
            INSERT INTO offer_volunteers (offer_id, user_id)
            VALUES ($1, $2)
            ON CONFLICT (offer_id, user_id) DO NOTHING
            "#,
        )
        .bind(offer_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }

    pub async fn exists(offer_id: OfferId, user_id: UserId, pool: &PgPool) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM offer_volunteers WHERE offer_id = $1 AND user_id = $2)",
        )
        .bind(offer_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(exists)
    }

    /// Accounts that joined the offer, in join order
    pub async fn find_volunteers(offer_id: OfferId, pool: &PgPool) -> Result<Vec<UserProfile>> {
        let volunteers = sqlx::query_as::<_, UserProfile>(
            r#"
            SELECT u.* FROM user_profiles u
            JOIN offer_volunteers v ON v.user_id = u.id
            WHERE v.offer_id = $1
            ORDER BY v.joined_at, u.id
            "#,
        )
        .bind(offer_id)
        .fetch_all(pool)
        .await?;
        Ok(volunteers)
    }

    pub async fn count(offer_id: OfferId, pool: &PgPool) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM offer_volunteers WHERE offer_id = $1",
        )
        .bind(offer_id)
        .fetch_one(pool)
        .await?;
        Ok(count)
    }
}

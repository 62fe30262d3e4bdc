//! Per-request identity: the logged-in account (if any) and its `Role`.

use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use tower_sessions::Session;
use tracing::warn;

use crate::common::Role;
use crate::domains::member::models::UserProfile;
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::session;

/// Who is making the request, resolved once from the session
#[derive(Debug, Clone)]
pub struct Requester {
    pub account: Option<UserProfile>,
    pub role: Role,
    pub session: Session,
}

impl Requester {
    pub fn email(&self) -> Option<&str> {
        self.account.as_ref().map(|a| a.email.as_str())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Requester
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::Internal(anyhow::anyhow!(msg)))?;

        let Extension(app_state) = Extension::<AppState>::from_request_parts(parts, state)
            .await
            .map_err(|err| AppError::Internal(anyhow::anyhow!(err.to_string())))?;

        let Some(user_id) = session::current_user_id(&session).await? else {
            return Ok(Self {
                account: None,
                role: Role::Anonymous,
                session,
            });
        };

        let Some(account) = UserProfile::find_by_id(user_id, &app_state.db_pool).await? else {
            // Account removed while the session was alive
            warn!(user_id = %user_id, "Session refers to a missing account");
            session::logout(&session).await?;
            return Ok(Self {
                account: None,
                role: Role::Anonymous,
                session,
            });
        };

        let role = account.role(&app_state.db_pool).await?;
        Ok(Self {
            account: Some(account),
            role,
            session,
        })
    }
}

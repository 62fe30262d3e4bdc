//! HTTP error mapping.
//!
//! Handlers return `Result<Response, AppError>`; validation problems never
//! reach this type because they re-render the form instead.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::common::AuthError;
use crate::domains::offers::OfferError;
use crate::server::response::{found, login_url};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("not found")]
    NotFound,

    #[error("forbidden")]
    Forbidden,

    /// Anonymous requester on a page that logging in could unlock
    #[error("login required")]
    LoginRequired { next: String },

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Map a gate refusal; `next` is where login should send the user back to
    pub fn from_auth(err: AuthError, next: &str) -> Self {
        match err {
            AuthError::AuthenticationRequired => AppError::LoginRequired {
                next: next.to_string(),
            },
            AuthError::PermissionDenied(_) | AuthError::AdminRequired => AppError::Forbidden,
        }
    }

    /// Map an offer action failure that the handler did not render itself
    pub fn from_offer(err: OfferError, next: &str) -> Self {
        match err {
            OfferError::NotFound => AppError::NotFound,
            OfferError::Unauthorized(e) => Self::from_auth(e, next),
            OfferError::Invalid(e) => AppError::Internal(e.into()),
            OfferError::Internal(e) => AppError::Internal(e),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND.into_response(),
            AppError::Forbidden => StatusCode::FORBIDDEN.into_response(),
            AppError::LoginRequired { next } => found(&login_url(&next)),
            AppError::Internal(e) => {
                error!(error = ?e, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}

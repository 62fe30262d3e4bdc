use thiserror::Error;

use crate::common::AuthError;
use crate::domains::offers::data::FormErrors;

/// Errors from offer actions, each mapped to one HTTP outcome by the server
#[derive(Error, Debug)]
pub enum OfferError {
    #[error("Offer not found")]
    NotFound,

    #[error(transparent)]
    Unauthorized(#[from] AuthError),

    #[error(transparent)]
    Invalid(#[from] FormErrors),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

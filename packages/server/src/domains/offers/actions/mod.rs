//! Offer domain actions - business logic functions
//!
//! Actions take the requester's `Role` explicitly, run the authorization
//! gate, validate, and then touch the database through the models.

mod create_offer;
mod edit_offer;
mod errors;
mod join_offer;
mod moderate_offer;

pub use create_offer::create_offer;
pub use edit_offer::{edit_offer, EditOutcome};
pub use errors::OfferError;
pub use join_offer::{join_offer, JoinOutcome};
pub use moderate_offer::{accept_offer, delete_offer};

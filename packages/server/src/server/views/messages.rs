//! User-facing strings, kept in one place

pub const OFFER_CHANGED: &str = "Offer has been changed.";
pub const OFFER_FORM_INVALID: &str = "The form contains invalid fields";
pub const OFFER_CREATED: &str = "Offer has been created. It will be visible after an administrator accepts it.";
pub const STATUS_CHANGE_DENIED: &str = "Only administrators can change the offer status.";
pub const OFFER_DELETED: &str = "Offer has been deleted.";
pub const OFFER_ACCEPTED: &str = "Offer has been accepted.";

pub const JOIN_FORM_INVALID: &str = "The form contains invalid data";
pub const JOIN_THANK_YOU: &str = "Thank you for your interest in this offer. The organization will contact you.";
pub const JOIN_ALREADY_JOINED: &str = "You have already applied for this offer.";
pub const JOIN_LOGIN_FIRST: &str = "An account with this email already exists. Log in to apply for the offer.";
pub const JOIN_REGISTER_FIRST: &str = "Register an account to apply for the offer.";

pub const NO_OFFERS: &str = "No offers match the given criteria";

pub const LOGIN_INVALID: &str = "Invalid email or password";
pub const LOGGED_IN: &str = "You have been logged in.";
pub const LOGGED_OUT: &str = "You have been logged out.";
pub const REGISTERED: &str = "Your account has been created.";

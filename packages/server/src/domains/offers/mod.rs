//! Offers domain - volunteering opportunities posted by organizations
//!
//! Responsibilities:
//! - Offer storage, visibility and archive queries
//! - Form validation for create / edit / join
//! - Create, edit, join, delete and accept actions behind the authorization gate

pub mod actions;
pub mod data;
pub mod models;

pub use actions::*;
pub use data::*;
pub use models::*;

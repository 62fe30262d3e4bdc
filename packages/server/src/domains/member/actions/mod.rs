//! Member domain actions - business logic functions
//!
//! Actions are async functions called directly from HTTP handlers.

mod authenticate;
mod register_member;

pub use authenticate::authenticate;
pub use register_member::{register_member, RegisterError, MIN_PASSWORD_LENGTH};

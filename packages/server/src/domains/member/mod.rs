//! Member domain - accounts, login and registration
//!
//! Responsibilities:
//! - Account lookup and creation (argon2-hashed passwords)
//! - Resolving an account into an explicit `Role`

pub mod actions;
pub mod models;

pub use actions::*;
pub use models::*;

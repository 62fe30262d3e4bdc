// Volunteer offers server - core library
//
// Organizations post volunteering offers, volunteers browse and join them,
// administrators moderate. The binary in server/main.rs serves the HTTP app.

pub mod common;
pub mod config;
pub mod domains;
pub mod server;

pub use config::*;

// HTTP server setup (Axum + server-rendered pages)
pub mod app;
pub mod error;
pub mod requester;
pub mod response;
pub mod routes;
pub mod session;
pub mod views;

pub use app::*;
pub use error::AppError;

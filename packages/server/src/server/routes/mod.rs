// HTTP routes
pub mod auth;
pub mod health;
pub mod offers;

pub use auth::*;
pub use health::*;
pub use offers::*;

use axum::response::Response;

use crate::server::error::AppError;
use crate::server::requester::Requester;
use crate::server::response::page;
use crate::server::session;
use crate::server::views::layout;

/// Wrap a page body in the layout, consuming pending flash messages
pub(crate) async fn render(
    requester: &Requester,
    title: &str,
    body: String,
) -> Result<Response, AppError> {
    let flashes = session::take_flashes(&requester.session).await?;
    Ok(page(layout(title, requester.email(), &flashes, &body)))
}

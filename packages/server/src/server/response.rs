//! Small response builders shared by the route handlers.

use axum::{
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
};

/// Plain 302 redirect
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

/// 200 page
pub fn page(body: String) -> Response {
    Html(body).into_response()
}

/// Login page URL returning to `next` afterwards
pub fn login_url(next: &str) -> String {
    // Slashes stay readable in the query string
    format!("/login?next={}", urlencoding::encode(next).replace("%2F", "/"))
}

/// Accept only local absolute paths as a post-login target
pub fn safe_next(next: Option<&str>) -> Option<&str> {
    next.map(str::trim)
        .filter(|n| n.starts_with('/') && !n.starts_with("//") && !n.contains('\\'))
}

//! Application setup and server configuration.

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::get,
    Router,
};
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tower_sessions::{MemoryStore, SessionManagerLayer};
use tracing::warn;

use crate::config::Config;
use crate::server::routes::{
    accept_offer_handler, archived_offers_handler, create_offer_handler,
    create_offer_page_handler, delete_offer_handler, edit_offer_handler, edit_offer_page_handler,
    health_handler, index_handler, join_offer_handler, join_offer_page_handler,
    list_offers_handler, login_handler, login_page_handler, logout_handler, offer_detail_handler,
    register_handler, register_page_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, config: &Config) -> Router {
    let app_state = AppState { db_pool: pool };

    let sessions = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(config.session_secure_cookie);

    Router::new()
        .route("/", get(index_handler))
        // Offers; static segments win over `:slug`
        .route("/offers", get(list_offers_handler))
        .route("/offers/archived", get(archived_offers_handler))
        .route(
            "/offers/create",
            get(create_offer_page_handler).post(create_offer_handler),
        )
        .route("/offers/delete/:id", get(delete_offer_handler))
        .route("/offers/accept/:id", get(accept_offer_handler))
        .route("/offers/:slug/:id", get(offer_detail_handler))
        .route(
            "/offers/:slug/:id/edit",
            get(edit_offer_page_handler).post(edit_offer_handler),
        )
        .route(
            "/offers/:slug/:id/join",
            get(join_offer_page_handler).post(join_offer_handler),
        )
        // Accounts
        .route("/login", get(login_page_handler).post(login_handler))
        .route("/logout", get(logout_handler))
        .route("/register", get(register_page_handler).post(register_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(sessions)
        .layer(Extension(app_state))
        .layer(cors_layer(&config.allowed_origins))
        .layer(TraceLayer::new_for_http())
}

/// CORS for the configured origins; none configured means same-origin only
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

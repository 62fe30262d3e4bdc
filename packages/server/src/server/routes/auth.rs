//! Login, logout and registration pages

use axum::{
    extract::{Extension, Query},
    response::Response,
    Form,
};
use serde::Deserialize;
use tracing::info;

use super::render;
use crate::domains::member::actions::{authenticate, register_member, RegisterError};
use crate::server::app::AppState;
use crate::server::error::AppError;
use crate::server::requester::Requester;
use crate::server::response::{found, safe_next};
use crate::server::session;
use crate::server::views::auth::{login_form, register_form};
use crate::server::views::messages;

#[derive(Debug, Deserialize)]
pub struct LoginQuery {
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    pub next: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login_page_handler(
    requester: Requester,
    Query(query): Query<LoginQuery>,
) -> Result<Response, AppError> {
    let next = safe_next(query.next.as_deref());
    let email = requester.email().unwrap_or("").to_string();
    render(&requester, "Log in", login_form(&email, next, None)).await
}

pub async fn login_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let next = safe_next(form.next.as_deref());

    let Some(account) = authenticate(&form.email, &form.password, &state.db_pool).await? else {
        let body = login_form(&form.email, next, Some(messages::LOGIN_INVALID));
        return render(&requester, "Log in", body).await;
    };

    session::login(&requester.session, account.id).await?;
    session::push_flash(&requester.session, messages::LOGGED_IN).await?;
    Ok(found(next.unwrap_or("/offers")))
}

pub async fn logout_handler(requester: Requester) -> Result<Response, AppError> {
    if let Some(account) = &requester.account {
        info!(user_id = %account.id, "Account logged out");
    }
    session::logout(&requester.session).await?;
    session::push_flash(&requester.session, messages::LOGGED_OUT).await?;
    Ok(found("/offers"))
}

pub async fn register_page_handler(requester: Requester) -> Result<Response, AppError> {
    render(&requester, "Register", register_form("", None)).await
}

pub async fn register_handler(
    Extension(state): Extension<AppState>,
    requester: Requester,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    match register_member(&form.email, &form.password, &state.db_pool).await {
        Ok(account) => {
            session::login(&requester.session, account.id).await?;
            session::push_flash(&requester.session, messages::REGISTERED).await?;
            Ok(found("/offers"))
        }
        Err(RegisterError::Internal(e)) => Err(AppError::Internal(e)),
        Err(e) => {
            let message = e.to_string();
            let body = register_form(&form.email, Some(&message));
            render(&requester, "Register", body).await
        }
    }
}

//! Session-backed login state and flash messages.
//!
//! Sessions live in a `tower_sessions::MemoryStore`; only the account id and
//! pending flash messages are stored in them.

use anyhow::{Context, Result};
use tower_sessions::Session;

use crate::common::UserId;

const USER_ID_KEY: &str = "user_id";
const FLASH_KEY: &str = "flash";

/// Account id stored by a previous login, if any
pub async fn current_user_id(session: &Session) -> Result<Option<UserId>> {
    session
        .get::<UserId>(USER_ID_KEY)
        .await
        .context("Failed to read user from session")
}

/// Bind the session to an account, issuing a fresh session id
pub async fn login(session: &Session, user_id: UserId) -> Result<()> {
    session
        .cycle_id()
        .await
        .context("Failed to cycle session id")?;
    session
        .insert(USER_ID_KEY, user_id)
        .await
        .context("Failed to store user in session")
}

/// Drop all session data, including pending flash messages
pub async fn logout(session: &Session) -> Result<()> {
    session.flush().await.context("Failed to clear session")
}

/// Queue a message for the next rendered page
pub async fn push_flash(session: &Session, message: impl Into<String>) -> Result<()> {
    let mut messages = session
        .get::<Vec<String>>(FLASH_KEY)
        .await
        .context("Failed to read flash messages")?
        .unwrap_or_default();
    messages.push(message.into());
    session
        .insert(FLASH_KEY, messages)
        .await
        .context("Failed to store flash message")
}

/// Take all queued messages; they are shown once
pub async fn take_flashes(session: &Session) -> Result<Vec<String>> {
    let messages = session
        .remove::<Vec<String>>(FLASH_KEY)
        .await
        .context("Failed to read flash messages")?;
    Ok(messages.unwrap_or_default())
}

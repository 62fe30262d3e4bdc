//! Integration tests for login, logout and registration.

mod common;

use common::{fixtures, TestHarness};
use server_core::domains::member::models::UserProfile;
use server_core::server::views::messages;
use test_context::test_context;

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_with_wrong_password(ctx: &TestHarness) {
    fixtures::create_volunteer(&ctx.db_pool).await.unwrap();

    let response = ctx
        .client()
        .post_form(
            "/login",
            &[("email", "volunteer@example.com"), ("password", "wrong")],
        )
        .await;

    response.assert_ok();
    assert!(response.body.contains(messages::LOGIN_INVALID));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_is_case_insensitive_and_follows_next(ctx: &TestHarness) {
    fixtures::create_volunteer(&ctx.db_pool).await.unwrap();

    let mut client = ctx.client();
    let response = client
        .post_form(
            "/login",
            &[
                ("email", "Volunteer@Example.com"),
                ("password", fixtures::PASSWORD),
                ("next", "/offers/archived"),
            ],
        )
        .await;

    response.assert_redirect("/offers/archived");
    let page = client.get("/offers").await;
    assert!(page.body.contains("Log out"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_ignores_foreign_next(ctx: &TestHarness) {
    fixtures::create_volunteer(&ctx.db_pool).await.unwrap();

    let response = ctx
        .client()
        .post_form(
            "/login",
            &[
                ("email", "volunteer@example.com"),
                ("password", fixtures::PASSWORD),
                ("next", "https://evil.example/"),
            ],
        )
        .await;

    response.assert_redirect("/offers");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_login_page_keeps_next(ctx: &TestHarness) {
    let response = ctx.client().get("/login?next=/offers/create").await;

    response.assert_ok();
    assert!(response.body.contains(r#"name="next" value="/offers/create""#));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_logout(ctx: &TestHarness) {
    fixtures::create_volunteer(&ctx.db_pool).await.unwrap();
    let mut client = ctx.client();
    client.login("volunteer@example.com", fixtures::PASSWORD).await;

    client.get("/logout").await.assert_redirect("/offers");

    let page = client.get("/offers").await;
    assert!(page.body.contains(messages::LOGGED_OUT));
    assert!(!page.body.contains("Log out"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_register_logs_in(ctx: &TestHarness) {
    let mut client = ctx.client();

    let response = client
        .post_form(
            "/register",
            &[("email", "new@example.com"), ("password", "secret1")],
        )
        .await;

    response.assert_redirect("/offers");
    let account = UserProfile::find_by_email("new@example.com", &ctx.db_pool)
        .await
        .unwrap()
        .unwrap();
    assert!(!account.is_administrator);
    assert_ne!(account.password_hash, "secret1");

    let page = client.get("/offers").await;
    assert!(page.body.contains(messages::REGISTERED));
    assert!(page.body.contains("new@example.com"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_register_rejects_short_password_and_duplicates(ctx: &TestHarness) {
    fixtures::create_volunteer(&ctx.db_pool).await.unwrap();
    let mut client = ctx.client();

    let short = client
        .post_form("/register", &[("email", "new@example.com"), ("password", "12345")])
        .await;
    short.assert_ok();
    assert!(short.body.contains("Password is too short"));

    let taken = client
        .post_form(
            "/register",
            &[("email", "VOLUNTEER@example.com"), ("password", "secret1")],
        )
        .await;
    taken.assert_ok();
    assert!(taken.body.contains("An account with this email already exists"));
    assert!(UserProfile::find_by_email("new@example.com", &ctx.db_pool)
        .await
        .unwrap()
        .is_none());
}

//! Integration tests for the offer edit page: full edits and status changes.

mod common;

use axum::http::StatusCode;
use common::{fixtures, TestHarness};
use server_core::domains::offers::models::{LegacyStatus, Offer};
use server_core::server::views::messages;
use test_context::test_context;

struct Scenario {
    offer: Offer,
    edit_url: String,
}

/// One organization, its member, an administrator, a volunteer and an offer
async fn seed(ctx: &TestHarness) -> Scenario {
    let pool = &ctx.db_pool;
    let org = fixtures::create_organization(pool, "Organization").await.unwrap();
    fixtures::create_organization_member(pool, "member@example.com", org.id)
        .await
        .unwrap();
    fixtures::create_admin(pool).await.unwrap();
    fixtures::create_volunteer(pool).await.unwrap();
    let offer = fixtures::create_offer(pool, org.id).await.unwrap();
    Scenario {
        edit_url: offer.edit_url(),
        offer,
    }
}

fn full_edit_fields(offer: &Offer, title: &str) -> Vec<(&'static str, String)> {
    vec![
        ("edit_type", "full_edit".to_string()),
        ("organization", offer.organization_id.to_string()),
        ("title", title.to_string()),
        ("description", "changed description".to_string()),
        ("requirements", "changed requirements".to_string()),
        ("time_commitment", "changed time_commitment".to_string()),
        ("benefits", "changed benefits".to_string()),
        ("location", "changed location".to_string()),
        ("time_period", "changed time_period".to_string()),
        ("started_at", "2016-01-01 10:00:00".to_string()),
        ("finished_at", "2016-02-01 10:00:00".to_string()),
    ]
}

fn as_form<'a>(fields: &'a [(&'static str, String)]) -> Vec<(&'static str, &'a str)> {
    fields.iter().map(|(k, v)| (*k, v.as_str())).collect()
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_unknown_offer_is_404(ctx: &TestHarness) {
    seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let response = client.get("/offers/volontulo-offer/9999/edit").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = client.get("/offers/volontulo-offer/abc/edit").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_stale_slug_redirects_to_canonical_edit_url(ctx: &TestHarness) {
    let scenario = seed(ctx).await;

    let response = ctx
        .client()
        .get(&format!("/offers/old-title/{}/edit", scenario.offer.id))
        .await;

    response.assert_redirect(&scenario.edit_url);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_anonymous_is_sent_to_login(ctx: &TestHarness) {
    let scenario = seed(ctx).await;

    let response = ctx.client().get(&scenario.edit_url).await;

    response.assert_redirect(&format!("/login?next={}", scenario.edit_url));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_volunteer_and_foreign_member_are_forbidden(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let other = fixtures::create_organization(&ctx.db_pool, "Other").await.unwrap();
    fixtures::create_organization_member(&ctx.db_pool, "other@example.com", other.id)
        .await
        .unwrap();

    for email in ["volunteer@example.com", "other@example.com"] {
        let mut client = ctx.client();
        client.login(email, fixtures::PASSWORD).await;
        let response = client.get(&scenario.edit_url).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{} may edit", email);
    }
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_member_sees_prefilled_form(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let response = client.get(&scenario.edit_url).await;

    response.assert_ok();
    assert!(response.body.contains("required requirements"));
    assert!(response.body.contains(r#"value="full_edit""#));
    // Status form is for administrators only
    assert!(!response.body.contains(r#"value="status_change""#));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_full_edit_with_missing_fields_changes_nothing(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let response = client
        .post_form(
            &scenario.edit_url,
            &[("edit_type", "full_edit"), ("title", "changed title")],
        )
        .await;

    response.assert_ok();
    assert!(response.body.contains(messages::OFFER_FORM_INVALID));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "volontulo offer");
    assert_eq!(stored.requirements, "required requirements");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_member_full_edit(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let fields = full_edit_fields(&scenario.offer, "changed title");
    let response = client.post_form(&scenario.edit_url, &as_form(&fields)).await;

    response.assert_ok();
    assert!(response.body.contains(messages::OFFER_CHANGED));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "changed title");
    assert_eq!(stored.location, "changed location");
    assert!(stored.started_at.is_some());
    assert_eq!(stored.status_old, LegacyStatus::New);
    assert!(response.body.contains(&stored.edit_url()));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_missing_edit_type_is_invalid(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let mut fields = full_edit_fields(&scenario.offer, "changed title");
    fields.remove(0);
    let response = client.post_form(&scenario.edit_url, &as_form(&fields)).await;

    response.assert_ok();
    assert!(response.body.contains(messages::OFFER_FORM_INVALID));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.title, "volontulo offer");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_member_status_change_is_ignored(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("member@example.com", fixtures::PASSWORD).await;

    let response = client
        .post_form(
            &scenario.edit_url,
            &[("edit_type", "status_change"), ("status_old", "ACTIVE")],
        )
        .await;

    response.assert_ok();
    assert!(response.body.contains(messages::STATUS_CHANGE_DENIED));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status_old, LegacyStatus::New);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_admin_status_change_only_touches_status(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("admin@example.com", fixtures::PASSWORD).await;

    let page = client.get(&scenario.edit_url).await;
    assert!(page.body.contains(r#"value="status_change""#));

    let response = client
        .post_form(
            &scenario.edit_url,
            &[
                ("edit_type", "status_change"),
                ("status_old", "SUSPENDED"),
                ("title", "ignored title"),
            ],
        )
        .await;

    response.assert_ok();
    assert!(response.body.contains(messages::OFFER_CHANGED));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status_old, LegacyStatus::Suspended);
    assert_eq!(stored.title, "volontulo offer");
    assert_eq!(stored.offer_status, scenario.offer.offer_status);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn test_admin_unknown_status_is_invalid(ctx: &TestHarness) {
    let scenario = seed(ctx).await;
    let mut client = ctx.client();
    client.login("admin@example.com", fixtures::PASSWORD).await;

    let response = client
        .post_form(
            &scenario.edit_url,
            &[("edit_type", "status_change"), ("status_old", "ARCHIVED")],
        )
        .await;

    response.assert_ok();
    assert!(response.body.contains(messages::OFFER_FORM_INVALID));
    let stored = fixtures::reload_offer(&ctx.db_pool, scenario.offer.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status_old, LegacyStatus::New);
}

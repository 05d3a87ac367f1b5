mod common;

use anyhow::Result;
use axum::http::StatusCode;
use uuid::Uuid;

use common::{json_body, token_for, TestApp};
use fitcoach_api::onboarding::{AccountOrigin, Role};

#[tokio::test]
async fn admin_can_inspect_a_user() -> Result<()> {
    let app = TestApp::new();
    let admin = app.user(true, AccountOrigin::SelfSignup, &[Role::Admin]).await;
    let client = app.user(false, AccountOrigin::Invited, &[Role::Client]).await;

    let res = app
        .get(
            &format!("/api/admin/users/{}/onboarding", client),
            Some(&token_for(admin, &[Role::Admin])),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["state"], "INVITED_CLIENT_PENDING");
    assert_eq!(body["data"]["route"], "/onboarding/invited");
    assert_eq!(body["data"]["facts"]["origin"], "INVITED");
    assert_eq!(body["data"]["facts"]["roles"], serde_json::json!(["CLIENT"]));
    Ok(())
}

#[tokio::test]
async fn non_admin_is_forbidden() -> Result<()> {
    let app = TestApp::new();
    let coach = app.user(true, AccountOrigin::SelfSignup, &[Role::Coach]).await;
    let client = app.user(false, AccountOrigin::Invited, &[Role::Client]).await;
    let token = token_for(coach, &[Role::Coach]);

    let res = app.get(&format!("/api/admin/users/{}/onboarding", client), Some(&token)).await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);

    let res = app
        .post(&format!("/api/admin/users/{}/onboarding/reset", client), Some(&token))
        .await?;
    assert_eq!(res.status(), StatusCode::FORBIDDEN);
    Ok(())
}

#[tokio::test]
async fn admin_reset_sends_user_back_to_onboarding() -> Result<()> {
    let app = TestApp::new();
    let admin = app.user(true, AccountOrigin::SelfSignup, &[Role::Admin]).await;
    let coach = app.user(true, AccountOrigin::Invited, &[Role::Coach]).await;

    let res = app
        .post(
            &format!("/api/admin/users/{}/onboarding/reset", coach),
            Some(&token_for(admin, &[Role::Admin])),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await?;
    assert_eq!(body["data"]["state"], "COACH_PENDING");
    assert_eq!(body["data"]["route"], "/onboarding/coach");
    Ok(())
}

#[tokio::test]
async fn admin_inspecting_unknown_user_gets_404() -> Result<()> {
    let app = TestApp::new();
    let admin = app.user(true, AccountOrigin::SelfSignup, &[Role::Admin]).await;

    let res = app
        .get(
            &format!("/api/admin/users/{}/onboarding", Uuid::new_v4()),
            Some(&token_for(admin, &[Role::Admin])),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

//! Integration tests for the account routes (signup, login, password reset,
//! logout).

use axum::http::{Method, StatusCode};
use guidepath_core::IdentityGateway;
use guidepath_domain::IdentityState;
use guidepath_infra::identity::memory::OutboxEmailKind;
use serde_json::json;

mod support;
use support::{response_json, setup_test_context};

#[tokio::test(flavor = "multi_thread")]
async fn signup_creates_account_and_sends_verification_email() {
    let ctx = setup_test_context(true);

    let response = ctx
        .send_json(
            Method::POST,
            "/signup",
            json!({
                "email": "ada@example.com",
                "password": "secret1",
                "confirm_password": "secret1",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = response_json(response).await;
    assert_eq!(body["email"], "ada@example.com");
    assert!(body["message"].as_str().unwrap_or_default().contains("verification"));

    let outbox = ctx.gateway.outbox();
    assert_eq!(outbox.len(), 1);
    assert_eq!(outbox[0].kind, OutboxEmailKind::Verification);
    assert_eq!(outbox[0].email, "ada@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn signup_with_mismatched_passwords_is_unprocessable() {
    let ctx = setup_test_context(true);

    let response = ctx
        .send_json(
            Method::POST,
            "/signup",
            json!({
                "email": "ada@example.com",
                "password": "secret1",
                "confirm_password": "secret2",
            }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["type"], "ValidationFailed");
    // No account was created, so no verification email went out
    assert!(ctx.gateway.outbox().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn login_before_verification_is_unauthorized() {
    let ctx = setup_test_context(true);

    ctx.send_json(
        Method::POST,
        "/signup",
        json!({
            "email": "ada@example.com",
            "password": "secret1",
            "confirm_password": "secret1",
        }),
    )
    .await;

    let response = ctx
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = response_json(response).await;
    assert!(body["error"]["detail"]
        .as_str()
        .unwrap_or_default()
        .contains("verify your email"));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_after_verification_reports_missing_profile_without_prompt() {
    let ctx = setup_test_context(true);
    ctx.send_json(
        Method::POST,
        "/signup",
        json!({
            "email": "ada@example.com",
            "password": "secret1",
            "confirm_password": "secret1",
        }),
    )
    .await;
    ctx.gateway.mark_verified("ada@example.com").expect("verify");

    let response = ctx
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    // No saved profile: the caller gets no incomplete-profile prompt
    assert_eq!(body["profile_incomplete"], json!(false));
}

#[tokio::test(flavor = "multi_thread")]
async fn login_with_incomplete_saved_profile_prompts() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    // Save a profile missing skills, then sign out and back in
    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({ "firstName": "Ada", "lastName": "Lovelace" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    ctx.send_json(Method::POST, "/logout", json!({})).await;

    let response = ctx
        .send_json(
            Method::POST,
            "/login",
            json!({ "email": "ada@example.com", "password": "secret1" }),
        )
        .await;
    let body = response_json(response).await;
    assert_eq!(body["profile_incomplete"], json!(true));
}

#[tokio::test(flavor = "multi_thread")]
async fn password_reset_for_unknown_account_fails() {
    let ctx = setup_test_context(true);

    let response = ctx
        .send_json(Method::POST, "/password-reset", json!({ "email": "nobody@example.com" }))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["type"], "IdentityUpdateFailed");
}

#[tokio::test(flavor = "multi_thread")]
async fn password_reset_lands_in_the_outbox() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx
        .send_json(Method::POST, "/password-reset", json!({ "email": "ada@example.com" }))
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let outbox = ctx.gateway.outbox();
    assert!(outbox
        .iter()
        .any(|email| email.kind == OutboxEmailKind::PasswordReset));
}

#[tokio::test(flavor = "multi_thread")]
async fn logout_publishes_absent() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx.send_json(Method::POST, "/logout", json!({})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(ctx.gateway.current_identity(), IdentityState::Absent);
}

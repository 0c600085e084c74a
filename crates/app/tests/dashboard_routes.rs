//! Integration tests for the gated dashboard route: session gating outcomes
//! and recommendation selection end to end.

use axum::http::{header, Method, StatusCode};
use serde_json::json;

mod support;
use support::{response_json, setup_test_context};

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_without_session_redirects_to_login() {
    let ctx = setup_test_context(true);

    let response = ctx.get("/dashboard").await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get(header::LOCATION).and_then(|v| v.to_str().ok()),
        Some("/login")
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_before_first_notification_is_pending_not_redirect() {
    // Gateway not initialized: state is still Unknown
    let ctx = setup_test_context(false);

    let response = ctx.get("/dashboard").await;

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.headers().get(header::LOCATION).is_none(), "must not redirect yet");
    let body = response_json(response).await;
    assert_eq!(body["status"], "pending");
}

#[tokio::test(flavor = "multi_thread")]
async fn dashboard_with_unverified_session_redirects_to_login() {
    let ctx = setup_test_context(true);
    // Sign up signs the user in, but the email is not verified yet
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

    let response = ctx.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test(flavor = "multi_thread")]
async fn first_dashboard_view_defaults_and_provisions_the_record() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx.get("/dashboard").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["tier"], "default");
    assert_eq!(body["courses"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["warning"]["type"], "ProfileNotFound");

    // An empty recommendation record was provisioned for the user
    assert_eq!(ctx.store.collection_len("recommendations").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn complete_profile_selects_the_personalized_set() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({ "firstName": "A", "lastName": "B", "skills": "x" }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.get("/dashboard").await;
    let body = response_json(response).await;

    assert_eq!(body["tier"], "personalized");
    assert!(body.get("warning").is_none(), "no degradation expected");

    let titles: Vec<&str> = body["courses"]
        .as_array()
        .expect("courses array")
        .iter()
        .filter_map(|c| c["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Advanced Data Analytics",
            "Full Stack Web Development",
            "Deep Learning with TensorFlow",
        ]
    );
    for course in body["courses"].as_array().expect("courses array") {
        let rating = course["rating"].as_f64().expect("rating");
        assert!((4.7..=4.9).contains(&rating));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn incomplete_profile_selects_the_default_set_without_warning() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.send_json(
        Method::PUT,
        "/edit-profile",
        json!({ "firstName": "A", "lastName": "B" }),
    )
    .await;

    let response = ctx.get("/dashboard").await;
    let body = response_json(response).await;

    assert_eq!(body["tier"], "default");
    assert!(body.get("warning").is_none());
    for course in body["courses"].as_array().expect("courses array") {
        let rating = course["rating"].as_f64().expect("rating");
        assert!((4.0..=5.0).contains(&rating));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn unreachable_store_degrades_to_the_default_set() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.store.set_unavailable(true);
    let response = ctx.get("/dashboard").await;

    // The view stays usable
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["tier"], "default");
    assert_eq!(body["courses"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["warning"]["type"], "ProfileFetchFailed");
}

#[tokio::test(flavor = "multi_thread")]
async fn record_provisioning_is_idempotent_across_views() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.get("/dashboard").await;
    ctx.get("/dashboard").await;

    assert_eq!(ctx.store.collection_len("recommendations").await, 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn assessment_route_is_gated_too() {
    let ctx = setup_test_context(true);

    let response = ctx.get("/psychometric-assessment").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    ctx.sign_in_verified("ada@example.com", "secret1").await;
    let response = ctx.get("/psychometric-assessment").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert!(body["sections"].as_array().is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn home_route_is_public() {
    let ctx = setup_test_context(true);

    let response = ctx.get("/").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["name"], "Guidepath");
}

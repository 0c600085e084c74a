//! Integration tests for the profile edit routes.

use axum::http::{Method, StatusCode};
use guidepath_core::IdentityGateway;
use guidepath_domain::IdentityState;
use serde_json::json;

mod support;
use support::{response_json, setup_test_context};

#[tokio::test(flavor = "multi_thread")]
async fn edit_profile_without_session_redirects() {
    let ctx = setup_test_context(true);
    let response = ctx.get("/edit-profile").await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test(flavor = "multi_thread")]
async fn prefill_is_empty_before_first_save() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx.get("/edit-profile").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    assert_eq!(body["profile"], json!(null));
    // The read-only email field is prefilled from the identity
    assert_eq!(body["email"], "ada@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn empty_first_name_is_rejected_without_a_write() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({ "firstName": "", "lastName": "Lovelace", "skills": "analysis" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["type"], "ValidationFailed");
    assert_eq!(body["error"]["detail"]["fields"], json!(["first_name"]));

    // Nothing was written
    assert_eq!(ctx.store.collection_len("users").await, 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn save_merges_and_keeps_untouched_fields() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "education": "Mathematics",
                "skills": "analysis",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["message"], "Profile updated successfully!");

    // A second save without `education` must preserve it
    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({
                "firstName": "Ada",
                "lastName": "Lovelace",
                "skills": "analysis, compilers",
            }),
        )
        .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = ctx.get("/edit-profile").await;
    let body = response_json(response).await;
    assert_eq!(body["profile"]["education"], "Mathematics");
    assert_eq!(body["profile"]["skills"], "analysis, compilers");
    // Email mirrors the identity even though the form never sends it
    assert_eq!(body["profile"]["email"], "ada@example.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn save_refreshes_the_display_name_mirror() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.send_json(
        Method::PUT,
        "/edit-profile",
        json!({ "firstName": "Ada", "lastName": "Lovelace", "skills": "analysis" }),
    )
    .await;

    match ctx.gateway.current_identity() {
        IdentityState::Present(identity) => {
            assert_eq!(identity.display_name.as_deref(), Some("Ada Lovelace"));
        }
        other => panic!("expected Present, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn prefill_degrades_with_a_warning_when_the_store_is_down() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.store.set_unavailable(true);
    let response = ctx.get("/edit-profile").await;

    // The edit view stays usable with an empty form
    assert_eq!(response.status(), StatusCode::OK);
    let body = response_json(response).await;
    assert_eq!(body["profile"], json!(null));
    assert_eq!(body["warning"]["type"], "ProfileFetchFailed");
}

#[tokio::test(flavor = "multi_thread")]
async fn write_failure_surfaces_as_bad_gateway() {
    let ctx = setup_test_context(true);
    ctx.sign_in_verified("ada@example.com", "secret1").await;

    ctx.store.set_unavailable(true);
    let response = ctx
        .send_json(
            Method::PUT,
            "/edit-profile",
            json!({ "firstName": "Ada", "lastName": "Lovelace" }),
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = response_json(response).await;
    assert_eq!(body["error"]["type"], "WriteFailed");
}

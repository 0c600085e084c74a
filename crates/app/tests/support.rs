//! Shared context for integration tests exercising the HTTP surface.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use guidepath_core::IdentityGateway;
use guidepath_domain::Config;
use guidepath_infra::{DocumentStore, MemoryDocumentStore, MemoryIdentityGateway};
use guidepath_lib::{build_router, AppContext};
use tower::ServiceExt;

/// Shared context for integration tests that need direct adapter access.
pub struct TestContext {
    /// Router under test.
    pub router: Router,
    /// Identity gateway handle, for verification and state assertions.
    pub gateway: Arc<MemoryIdentityGateway>,
    /// Document store handle, for direct reads and failure injection.
    pub store: Arc<MemoryDocumentStore>,
}

/// Create a new test context with fresh in-memory adapters.
///
/// The gateway is initialized (first notification delivered) unless a test
/// needs to observe the pre-notification `Unknown` state.
pub fn setup_test_context(initialize_gateway: bool) -> TestContext {
    let gateway = Arc::new(MemoryIdentityGateway::new());
    if initialize_gateway {
        gateway.initialize();
    }
    let store = Arc::new(MemoryDocumentStore::new());

    let ctx = Arc::new(AppContext::with_adapters(
        Config::default(),
        Arc::clone(&store) as Arc<dyn DocumentStore>,
        Arc::clone(&gateway) as Arc<dyn IdentityGateway>,
    ));
    let router = build_router(ctx);

    TestContext { router, gateway, store }
}

impl TestContext {
    /// Send a GET request.
    pub async fn get(&self, path: &str) -> Response {
        let request = Request::builder()
            .method(Method::GET)
            .uri(path)
            .body(Body::empty())
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("route request")
    }

    /// Send a request with a JSON body.
    pub async fn send_json(&self, method: Method, path: &str, body: serde_json::Value) -> Response {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("build request");
        self.router.clone().oneshot(request).await.expect("route request")
    }

    /// Create an account, verify its email, and sign in through the API.
    pub async fn sign_in_verified(&self, email: &str, password: &str) {
        let response = self
            .send_json(
                Method::POST,
                "/signup",
                serde_json::json!({
                    "email": email,
                    "password": password,
                    "confirm_password": password,
                }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::CREATED, "signup should succeed");

        self.gateway.mark_verified(email).expect("verify email");

        let response = self
            .send_json(
                Method::POST,
                "/login",
                serde_json::json!({ "email": email, "password": password }),
            )
            .await;
        assert_eq!(response.status(), StatusCode::OK, "login should succeed");
    }
}

/// Read a JSON response body.
pub async fn response_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response body")
}

//! Session-gate middleware for protected routes
//!
//! Maps the gate's three outcomes onto HTTP: `Allow` runs the handler,
//! `Redirect` answers 303 See Other, and `Pending` answers 503 with a retry
//! hint (the server-side analog of the loading placeholder - the state is
//! not yet known, so no redirect may be issued).

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use guidepath_core::{evaluate, RouteDecision};
use guidepath_domain::{GuidepathError, Result, UserIdentity};
use serde_json::json;
use tracing::debug;

use crate::context::AppContext;

/// Gate every request through the session gate.
pub async fn require_session(
    State(ctx): State<Arc<AppContext>>,
    request: Request,
    next: Next,
) -> Response {
    match evaluate(&ctx.identity.current_identity()) {
        RouteDecision::Allow => next.run(request).await,
        RouteDecision::Redirect(target) => {
            debug!(path = %request.uri().path(), target, "session gate redirect");
            Redirect::to(target).into_response()
        }
        RouteDecision::Pending => (
            StatusCode::SERVICE_UNAVAILABLE,
            [(header::RETRY_AFTER, "1")],
            Json(json!({ "status": "pending" })),
        )
            .into_response(),
    }
}

/// The signed-in identity for a request that passed the gate.
///
/// # Errors
/// Returns `NotAuthenticated` if the state changed between the gate and the
/// handler (sign-out raced the request).
pub fn current_identity(ctx: &AppContext) -> Result<UserIdentity> {
    ctx.identity
        .current_identity()
        .identity()
        .cloned()
        .ok_or_else(|| GuidepathError::NotAuthenticated("no signed-in identity".into()))
}

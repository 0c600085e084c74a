//! Route table and HTTP error mapping

pub mod assessment;
pub mod auth;
pub mod dashboard;
pub mod profile;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{middleware, Json, Router};
use guidepath_domain::constants::{
    ASSESSMENT_ROUTE, DASHBOARD_ROUTE, EDIT_PROFILE_ROUTE, HOME_ROUTE, LOGIN_ROUTE,
    PASSWORD_RESET_ROUTE, SIGNUP_ROUTE,
};
use guidepath_domain::GuidepathError;
use serde_json::json;
use tracing::warn;

use crate::context::AppContext;
use crate::session;
use crate::utils::logging::error_label;

/// Domain error carried out of a handler.
///
/// Converts to an HTTP response with a status matching the error kind and
/// the serialized error as the body, so callers can tie failures to the
/// specific field or action.
pub struct ApiError(pub GuidepathError);

impl From<GuidepathError> for ApiError {
    fn from(err: GuidepathError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            GuidepathError::ValidationFailed { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            GuidepathError::NotAuthenticated(_) => StatusCode::UNAUTHORIZED,
            GuidepathError::ProfileNotFound(_) => StatusCode::NOT_FOUND,
            GuidepathError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            GuidepathError::ProfileFetchFailed(_)
            | GuidepathError::WriteFailed(_)
            | GuidepathError::RecommendationRecordInitFailed(_)
            | GuidepathError::IdentityUpdateFailed(_) => StatusCode::BAD_GATEWAY,
            GuidepathError::Config(_) | GuidepathError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        warn!(error = error_label(&self.0), %status, "request failed: {}", self.0);
        (status, Json(json!({ "error": self.0 }))).into_response()
    }
}

/// Build the application router.
///
/// Every route under the session gate re-checks the identity state on each
/// request; the public routes (home, signup, login, password reset, logout)
/// bypass it.
pub fn build_router(ctx: Arc<AppContext>) -> Router {
    let protected = Router::new()
        .route(DASHBOARD_ROUTE, get(dashboard::show))
        .route(EDIT_PROFILE_ROUTE, get(profile::load).put(profile::save))
        .route(ASSESSMENT_ROUTE, get(assessment::show))
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&ctx),
            session::require_session,
        ));

    Router::new()
        .route(HOME_ROUTE, get(home))
        .route(SIGNUP_ROUTE, post(auth::signup))
        .route(LOGIN_ROUTE, post(auth::login))
        .route(PASSWORD_RESET_ROUTE, post(auth::password_reset))
        .route("/logout", post(auth::logout))
        .merge(protected)
        .with_state(ctx)
}

/// Public landing payload.
async fn home() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Guidepath",
        "tagline": "Explore career opportunities and personalized learning.",
    }))
}

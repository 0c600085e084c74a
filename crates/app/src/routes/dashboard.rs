//! Dashboard handler - recommendation selection

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use guidepath_domain::{CourseRecommendation, GuidepathError, RecommendationTier};
use serde::Serialize;

use crate::context::AppContext;
use crate::session;

use super::ApiError;

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub tier: RecommendationTier,
    pub courses: Vec<CourseRecommendation>,
    /// Degradation reason when the default set was a fallback. The view
    /// stays usable either way, so this is a warning, not a failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<GuidepathError>,
}

/// Select and return the recommendation set for the signed-in user.
///
/// Store trouble degrades to the default set with a warning; it never fails
/// the request.
pub async fn show(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<DashboardResponse>, ApiError> {
    // The gate already ran; re-read the state for the selection itself.
    let _ = session::current_identity(&ctx)?;
    let state = ctx.identity.current_identity();
    let selection = ctx.recommendation_service.select(&state).await;

    Ok(Json(DashboardResponse {
        tier: selection.tier,
        courses: selection.courses,
        warning: selection.error,
    }))
}

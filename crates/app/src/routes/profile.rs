//! Profile edit handlers

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use guidepath_domain::{GuidepathError, ProfilePatch, UserProfile};
use serde::Serialize;
use tracing::warn;

use crate::context::AppContext;
use crate::session;

use super::ApiError;

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    /// The stored profile, or `null` when none has been saved yet
    pub profile: Option<UserProfile>,
    /// Mirrors the identity's email for the form's read-only email field
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<GuidepathError>,
}

/// Load the stored profile for form prefill.
///
/// A store failure degrades to an empty form with a warning rather than
/// blocking the edit view.
pub async fn load(State(ctx): State<Arc<AppContext>>) -> Result<Json<ProfileResponse>, ApiError> {
    let identity = session::current_identity(&ctx)?;

    let (profile, warning) = match ctx.profile_service.load(&identity.uid).await {
        Ok(profile) => (profile, None),
        Err(err) => {
            warn!(uid = %identity.uid, error = %err, "profile prefill fetch failed");
            (None, Some(err))
        }
    };

    Ok(Json(ProfileResponse { profile, email: identity.email, warning }))
}

/// Save the edited profile.
pub async fn save(
    State(ctx): State<Arc<AppContext>>,
    Json(patch): Json<ProfilePatch>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let identity = session::current_identity(&ctx)?;
    ctx.profile_service.save(&identity, patch).await?;
    Ok(Json(serde_json::json!({ "message": "Profile updated successfully!" })))
}

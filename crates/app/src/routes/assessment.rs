//! Psychometric assessment handler
//!
//! The assessment itself ships separately; this protected endpoint serves
//! the static outline the view renders.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::context::AppContext;
use crate::session;

use super::ApiError;

/// Static assessment outline for the protected view.
pub async fn show(State(ctx): State<Arc<AppContext>>) -> Result<Json<serde_json::Value>, ApiError> {
    let _ = session::current_identity(&ctx)?;

    Ok(Json(json!({
        "title": "Career Guidance Assessment",
        "description": "Take an assessment to discover your best career path.",
        "sections": [
            { "name": "Interests", "questions": 10 },
            { "name": "Strengths", "questions": 10 },
            { "name": "Work Style", "questions": 8 },
        ],
    })))
}

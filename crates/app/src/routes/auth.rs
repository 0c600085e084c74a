//! Signup, login, password reset, and logout handlers

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::context::AppContext;

use super::ApiError;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub uid: String,
    pub email: String,
    pub message: String,
}

/// Create an account and send the verification email.
pub async fn signup(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let identity = ctx
        .accounts
        .sign_up(&request.email, &request.password, &request.confirm_password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            uid: identity.uid,
            email: identity.email,
            message: "Signup successful! Please check your email for verification.".into(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    /// True when a saved profile fails the completeness rule, so the caller
    /// can prompt the user to finish it.
    pub profile_incomplete: bool,
}

/// Sign in; rejects unverified accounts.
pub async fn login(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let outcome = ctx.accounts.sign_in(&request.email, &request.password).await?;

    Ok(Json(LoginResponse {
        uid: outcome.identity.uid,
        email: outcome.identity.email,
        display_name: outcome.identity.display_name,
        profile_incomplete: outcome.profile_incomplete,
    }))
}

#[derive(Debug, Deserialize)]
pub struct PasswordResetRequest {
    pub email: String,
}

/// Send a password reset email.
pub async fn password_reset(
    State(ctx): State<Arc<AppContext>>,
    Json(request): Json<PasswordResetRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    ctx.accounts.send_password_reset(&request.email).await?;
    Ok(Json(serde_json::json!({
        "message": "A password reset link has been sent to your email."
    })))
}

/// Sign the current user out; subscribers observe `Absent`.
pub async fn logout(
    State(ctx): State<Arc<AppContext>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    ctx.accounts.sign_out().await?;
    Ok(Json(serde_json::json!({ "message": "Signed out." })))
}

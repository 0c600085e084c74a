//! Account flows over the identity gateway
//!
//! Validation happens here; everything credential-shaped is delegated to the
//! gateway. Signing in also fetches the profile so the caller can prompt the
//! user when it is incomplete.

use std::sync::Arc;

use guidepath_domain::{GuidepathError, Result, UserIdentity};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::info;

use crate::identity::IdentityGateway;
use crate::profile::completeness::is_complete;
use crate::profile::ports::ProfileRepository;

// Shape check only; deliverability is the gateway's concern.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static email regex"));

const MIN_PASSWORD_LENGTH: usize = 6;

/// Result of a successful sign-in
#[derive(Debug, Clone)]
pub struct SignInOutcome {
    /// The signed-in identity
    pub identity: UserIdentity,
    /// True when a profile document exists but fails the completeness rule,
    /// so the caller can prompt the user to finish it. False when no profile
    /// has been saved yet.
    pub profile_incomplete: bool,
}

/// Account service
pub struct AccountService {
    identity: Arc<dyn IdentityGateway>,
    profiles: Arc<dyn ProfileRepository>,
}

impl AccountService {
    /// Create a new account service
    pub fn new(identity: Arc<dyn IdentityGateway>, profiles: Arc<dyn ProfileRepository>) -> Self {
        Self { identity, profiles }
    }

    /// Create an account and send the verification email.
    ///
    /// # Errors
    /// Returns `ValidationFailed` for a malformed email, a too-short
    /// password, or a password/confirmation mismatch - all before any
    /// gateway call. Gateway errors pass through unchanged.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<UserIdentity> {
        let email = email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(GuidepathError::validation("invalid email address", &["email"]));
        }
        if password.len() < MIN_PASSWORD_LENGTH {
            return Err(GuidepathError::validation(
                format!("password must be at least {MIN_PASSWORD_LENGTH} characters"),
                &["password"],
            ));
        }
        if password != confirm_password {
            return Err(GuidepathError::validation(
                "Passwords do not match",
                &["password", "confirm_password"],
            ));
        }

        let identity = self.identity.sign_up(email, password).await?;
        self.identity.send_verification_email(&identity.email).await?;
        info!(uid = %identity.uid, "account created, verification email sent");
        Ok(identity)
    }

    /// Sign in and report whether the profile still needs completing.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` on bad credentials or when the email has
    /// not been verified yet, `ProfileFetchFailed` when the profile store
    /// cannot be read.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<SignInOutcome> {
        let identity = self.identity.sign_in(email.trim(), password).await?;

        if !identity.email_verified {
            return Err(GuidepathError::NotAuthenticated(
                "Please verify your email first.".into(),
            ));
        }

        let profile = self
            .profiles
            .fetch(&identity.uid)
            .await
            .map_err(|err| GuidepathError::ProfileFetchFailed(err.to_string()))?;

        // Only an existing-but-incomplete profile triggers the prompt; a user
        // who never saved one goes through the edit flow anyway.
        let profile_incomplete = profile.as_ref().is_some_and(|p| !is_complete(p));

        info!(uid = %identity.uid, profile_incomplete, "signed in");
        Ok(SignInOutcome { identity, profile_incomplete })
    }

    /// Send a password reset email.
    ///
    /// # Errors
    /// Returns `ValidationFailed` for a malformed email; gateway errors pass
    /// through unchanged.
    pub async fn send_password_reset(&self, email: &str) -> Result<()> {
        let email = email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(GuidepathError::validation("invalid email address", &["email"]));
        }
        self.identity.send_password_reset(email).await
    }

    /// Sign the current user out.
    pub async fn sign_out(&self) -> Result<()> {
        self.identity.sign_out().await
    }
}

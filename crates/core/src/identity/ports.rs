//! Port interface for the external identity gateway
//!
//! The gateway owns sign-in state and email verification; the application
//! consumes it through this trait and never reimplements any of it. Passing
//! the gateway explicitly keeps the auth state out of ambient singletons.

use async_trait::async_trait;
use guidepath_domain::{IdentityState, Result, UserIdentity};
use tokio::sync::watch;

/// Trait for identity gateway operations
///
/// Implementations hold the current [`IdentityState`] behind a
/// `tokio::sync::watch` channel: `current_identity` reads the latest value
/// and `subscribe` hands out a receiver for the notification stream.
#[async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Latest observed sign-in state.
    ///
    /// Returns [`IdentityState::Unknown`] until the gateway has delivered its
    /// first notification.
    fn current_identity(&self) -> IdentityState;

    /// Subscribe to sign-in state changes.
    ///
    /// The receiver is the subscription: dropping it unsubscribes, so a view
    /// that is torn down releases its subscription with no explicit call. A
    /// notification arriving after the drop is discarded by the channel, not
    /// delivered into discarded state.
    fn subscribe(&self) -> watch::Receiver<IdentityState>;

    /// Create a new account.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` if the gateway rejects the credentials
    /// (e.g. email already registered), `IdentityUpdateFailed` on transport
    /// failure.
    async fn sign_up(&self, email: &str, password: &str) -> Result<UserIdentity>;

    /// Sign in with email and password.
    ///
    /// On success the gateway publishes `Present` to all subscribers.
    ///
    /// # Errors
    /// Returns `NotAuthenticated` on bad credentials, `IdentityUpdateFailed`
    /// on transport failure.
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserIdentity>;

    /// Ask the gateway to send a verification email for the account.
    ///
    /// # Errors
    /// Returns `IdentityUpdateFailed` if the gateway cannot send it.
    async fn send_verification_email(&self, email: &str) -> Result<()>;

    /// Ask the gateway to send a password reset email.
    ///
    /// # Errors
    /// Returns `IdentityUpdateFailed` if the gateway cannot send it.
    async fn send_password_reset(&self, email: &str) -> Result<()>;

    /// Sign the current user out.
    ///
    /// On success the gateway publishes `Absent` to all subscribers.
    async fn sign_out(&self) -> Result<()>;

    /// Refresh the identity's display-name mirror.
    ///
    /// # Errors
    /// Returns `IdentityUpdateFailed` on failure; callers treat this as
    /// best-effort (the profile store remains the source of truth).
    async fn update_display_name(&self, uid: &str, display_name: &str) -> Result<()>;
}

//! Session gate - route protection over the identity notification stream
//!
//! For a protected view the gate produces exactly one of three outcomes from
//! the current identity state. `Unknown` must never redirect: before the
//! first gateway notification arrives the caller shows a non-committal
//! loading state instead of bouncing a possibly-signed-in user to the login
//! page.

use guidepath_domain::constants::LOGIN_ROUTE;
use guidepath_domain::{GuidepathError, IdentityState, Result};
use tokio::sync::watch;

use crate::identity::IdentityGateway;

/// Outcome of evaluating a protected route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the protected view
    Allow,
    /// Send the caller to the given route
    Redirect(&'static str),
    /// No notification received yet; show a loading state
    Pending,
}

/// Evaluate a protected route against an identity state.
///
/// Pure function; the full decision table:
/// - `Unknown` -> `Pending`
/// - `Absent` -> `Redirect("/login")`
/// - `Present` with unverified email -> `Redirect("/login")`
/// - `Present` with verified email -> `Allow`
pub fn evaluate(state: &IdentityState) -> RouteDecision {
    match state {
        IdentityState::Unknown => RouteDecision::Pending,
        IdentityState::Absent => RouteDecision::Redirect(LOGIN_ROUTE),
        IdentityState::Present(identity) if !identity.email_verified => {
            RouteDecision::Redirect(LOGIN_ROUTE)
        }
        IdentityState::Present(_) => RouteDecision::Allow,
    }
}

/// A live gate for one protected view.
///
/// Holds a subscription to the gateway's notification stream for the lifetime
/// of the view; dropping the gate releases the subscription. The gate has no
/// terminal state - it re-evaluates on every notification.
pub struct SessionGate {
    rx: watch::Receiver<IdentityState>,
}

impl SessionGate {
    /// Open a gate subscribed to the given gateway.
    pub fn new(gateway: &dyn IdentityGateway) -> Self {
        Self { rx: gateway.subscribe() }
    }

    /// Open a gate over an existing receiver (used by tests and by callers
    /// that already hold a subscription).
    pub fn from_receiver(rx: watch::Receiver<IdentityState>) -> Self {
        Self { rx }
    }

    /// Decision for the latest observed state.
    pub fn decision(&self) -> RouteDecision {
        evaluate(&self.rx.borrow())
    }

    /// Wait for the next state change.
    ///
    /// # Errors
    /// Returns `Internal` if the gateway dropped its sender (the stream is
    /// gone for good, not a transient delivery failure).
    pub async fn changed(&mut self) -> Result<()> {
        self.rx
            .changed()
            .await
            .map_err(|_| GuidepathError::Internal("identity notification stream closed".into()))
    }
}

#[cfg(test)]
mod tests {
    use guidepath_domain::UserIdentity;

    use super::*;

    fn verified_user() -> UserIdentity {
        UserIdentity {
            uid: "u1".into(),
            email: "u1@example.com".into(),
            email_verified: true,
            display_name: None,
        }
    }

    #[test]
    fn unknown_is_pending_never_redirect() {
        assert_eq!(evaluate(&IdentityState::Unknown), RouteDecision::Pending);
    }

    #[test]
    fn absent_redirects_to_login() {
        assert_eq!(evaluate(&IdentityState::Absent), RouteDecision::Redirect("/login"));
    }

    #[test]
    fn unverified_identity_redirects_to_login() {
        let mut user = verified_user();
        user.email_verified = false;
        assert_eq!(
            evaluate(&IdentityState::Present(user)),
            RouteDecision::Redirect("/login")
        );
    }

    #[test]
    fn verified_identity_is_allowed() {
        assert_eq!(evaluate(&IdentityState::Present(verified_user())), RouteDecision::Allow);
    }

    #[tokio::test]
    async fn gate_re_evaluates_on_every_notification() {
        let (tx, rx) = watch::channel(IdentityState::Unknown);
        let mut gate = SessionGate::from_receiver(rx);

        assert_eq!(gate.decision(), RouteDecision::Pending);

        tx.send(IdentityState::Absent).expect("send state");
        gate.changed().await.expect("await change");
        assert_eq!(gate.decision(), RouteDecision::Redirect("/login"));

        tx.send(IdentityState::Present(verified_user())).expect("send state");
        gate.changed().await.expect("await change");
        assert_eq!(gate.decision(), RouteDecision::Allow);

        // Signing out re-gates the view
        tx.send(IdentityState::Absent).expect("send state");
        gate.changed().await.expect("await change");
        assert_eq!(gate.decision(), RouteDecision::Redirect("/login"));
    }

    #[tokio::test]
    async fn dropping_the_gate_releases_the_subscription() {
        let (tx, rx) = watch::channel(IdentityState::Unknown);
        let gate = SessionGate::from_receiver(rx);

        assert_eq!(tx.receiver_count(), 1);
        drop(gate);
        assert_eq!(tx.receiver_count(), 0);
    }

    #[tokio::test]
    async fn closed_stream_surfaces_as_internal_error() {
        let (tx, rx) = watch::channel(IdentityState::Unknown);
        let mut gate = SessionGate::from_receiver(rx);
        drop(tx);

        let err = gate.changed().await.expect_err("stream closed");
        assert!(matches!(err, GuidepathError::Internal(_)));
    }
}

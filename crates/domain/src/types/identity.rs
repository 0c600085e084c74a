//! Identity types
//!
//! Identities are owned and mutated exclusively by the external identity
//! gateway; the application only ever reads them.

use serde::{Deserialize, Serialize};

/// A signed-in user as reported by the identity gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    /// Opaque identifier assigned by the gateway
    pub uid: String,
    /// Email address the account was created with
    pub email: String,
    /// Whether the email address has been confirmed
    pub email_verified: bool,
    /// Display name mirror, refreshed best-effort on profile save
    pub display_name: Option<String>,
}

/// Sign-in state as observed through the gateway's notification stream.
///
/// `Unknown` is the sole initial state: it means no notification has been
/// received yet, which is distinct from a confirmed signed-out state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "identity")]
pub enum IdentityState {
    /// No notification received yet
    #[default]
    Unknown,
    /// Confirmed: nobody is signed in
    Absent,
    /// Confirmed: this identity is signed in
    Present(UserIdentity),
}

impl IdentityState {
    /// The signed-in identity, if any.
    pub fn identity(&self) -> Option<&UserIdentity> {
        match self {
            Self::Present(identity) => Some(identity),
            _ => None,
        }
    }
}

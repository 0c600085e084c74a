//! Profile edit flow
//!
//! Validates the edited profile, merge-writes it into the document store,
//! then refreshes the identity's display-name mirror. The profile store is
//! the source of truth; the mirror update is best-effort and a mirror
//! failure never fails an otherwise successful save.

use std::sync::Arc;

use guidepath_domain::{GuidepathError, ProfilePatch, Result, UserIdentity, UserProfile};
use tracing::{info, warn};

use crate::identity::IdentityGateway;

use super::ports::ProfileRepository;

/// Profile edit service
pub struct ProfileService {
    profiles: Arc<dyn ProfileRepository>,
    identity: Arc<dyn IdentityGateway>,
}

impl ProfileService {
    /// Create a new profile service
    pub fn new(profiles: Arc<dyn ProfileRepository>, identity: Arc<dyn IdentityGateway>) -> Self {
        Self { profiles, identity }
    }

    /// Load the stored profile for form prefill.
    ///
    /// # Errors
    /// Returns `ProfileFetchFailed` when the store cannot be reached.
    pub async fn load(&self, uid: &str) -> Result<Option<UserProfile>> {
        self.profiles
            .fetch(uid)
            .await
            .map_err(|err| GuidepathError::ProfileFetchFailed(err.to_string()))
    }

    /// Save an edited profile for the signed-in identity.
    ///
    /// Validation happens before any write is attempted: `first_name` and
    /// `last_name` must be non-empty after trimming (an unset patch field
    /// counts as empty - the edit form always submits both). The email field
    /// is forced to the identity's email; it is immutable through this flow.
    ///
    /// # Errors
    /// Returns `ValidationFailed` naming the offending fields, or
    /// `WriteFailed` when the store write fails.
    pub async fn save(&self, identity: &UserIdentity, mut patch: ProfilePatch) -> Result<()> {
        let first_name = trimmed(patch.first_name.as_deref());
        let last_name = trimmed(patch.last_name.as_deref());

        let mut missing = Vec::new();
        if first_name.is_empty() {
            missing.push("first_name");
        }
        if last_name.is_empty() {
            missing.push("last_name");
        }
        if !missing.is_empty() {
            return Err(GuidepathError::validation(
                format!("required field(s) empty: {}", missing.join(", ")),
                &missing,
            ));
        }

        patch.email = Some(identity.email.clone());

        self.profiles
            .save_merge(&identity.uid, &patch)
            .await
            .map_err(|err| GuidepathError::WriteFailed(err.to_string()))?;

        info!(uid = %identity.uid, "profile saved");

        // Best-effort mirror; the saved profile is already authoritative.
        let display_name = format!("{first_name} {last_name}");
        if let Err(err) = self.identity.update_display_name(&identity.uid, &display_name).await {
            warn!(uid = %identity.uid, error = %err, "display-name mirror update failed");
        }

        Ok(())
    }
}

fn trimmed(value: Option<&str>) -> String {
    value.unwrap_or_default().trim().to_string()
}

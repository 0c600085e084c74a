//! Port interface for profile persistence
//!
//! The profile store is an external document store; this trait is the
//! boundary between core logic and its adapter.

use async_trait::async_trait;
use guidepath_domain::{ProfilePatch, Result, UserProfile};

/// Trait for profile document persistence and retrieval
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Fetch the profile document for a user.
    ///
    /// `Ok(None)` means the document does not exist, which is a valid state
    /// (no profile has been saved yet), not an error.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport failure.
    async fn fetch(&self, uid: &str) -> Result<Option<UserProfile>>;

    /// Merge-write a partial profile into the user's document.
    ///
    /// Fields absent from the patch are preserved; the document is created
    /// if it does not exist.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport failure.
    async fn save_merge(&self, uid: &str, patch: &ProfilePatch) -> Result<()>;
}

//! Port interface for recommendation record provisioning
//!
//! Provisioning is an explicit idempotent operation, separate from the read
//! path, so tests can assert it without coupling it to selection logic.

use async_trait::async_trait;
use guidepath_domain::Result;

/// Trait for per-user recommendation record persistence
#[async_trait]
pub trait RecommendationRepository: Send + Sync {
    /// Whether a recommendation record exists for the user.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport failure.
    async fn record_exists(&self, uid: &str) -> Result<bool>;

    /// Create the user's recommendation record with an empty course list if
    /// it does not exist yet. Idempotent: an existing record is left
    /// untouched.
    ///
    /// Returns `true` when a record was created by this call.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport failure.
    async fn ensure_record(&self, uid: &str) -> Result<bool>;
}

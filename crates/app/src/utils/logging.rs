//! Tracing setup and error labelling helpers

use guidepath_domain::GuidepathError;
use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// Honours `RUST_LOG`; defaults to `info` for the workspace crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Convert a `GuidepathError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &GuidepathError) -> &'static str {
    match error {
        GuidepathError::NotAuthenticated(_) => "not_authenticated",
        GuidepathError::ProfileFetchFailed(_) => "profile_fetch_failed",
        GuidepathError::ProfileNotFound(_) => "profile_not_found",
        GuidepathError::RecommendationRecordInitFailed(_) => "recommendation_record_init_failed",
        GuidepathError::ValidationFailed { .. } => "validation_failed",
        GuidepathError::WriteFailed(_) => "write_failed",
        GuidepathError::StoreUnavailable(_) => "store_unavailable",
        GuidepathError::IdentityUpdateFailed(_) => "identity_update_failed",
        GuidepathError::Config(_) => "config",
        GuidepathError::Internal(_) => "internal",
    }
}

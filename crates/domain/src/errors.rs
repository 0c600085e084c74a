//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Guidepath
///
/// Store and network failures are converted into one of these kinds at the
/// boundary of the component that owns the call; none propagate as panics.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum GuidepathError {
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    #[error("Profile fetch failed: {0}")]
    ProfileFetchFailed(String),

    #[error("Profile not found: {0}")]
    ProfileNotFound(String),

    #[error("Recommendation record init failed: {0}")]
    RecommendationRecordInitFailed(String),

    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Human-readable reason, suitable for inline display.
        message: String,
        /// Names of the offending fields, so callers can re-present them
        /// specifically rather than showing a generic failure.
        fields: Vec<String>,
    },

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Identity update failed: {0}")]
    IdentityUpdateFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl GuidepathError {
    /// Build a `ValidationFailed` error for a set of required fields.
    pub fn validation(message: impl Into<String>, fields: &[&str]) -> Self {
        Self::ValidationFailed {
            message: message.into(),
            fields: fields.iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Result type alias for Guidepath operations
pub type Result<T> = std::result::Result<T, GuidepathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_helper_collects_field_names() {
        let err = GuidepathError::validation("first name is required", &["first_name"]);
        match err {
            GuidepathError::ValidationFailed { fields, .. } => {
                assert_eq!(fields, vec!["first_name".to_string()]);
            }
            other => panic!("unexpected error kind: {other:?}"),
        }
    }

    #[test]
    fn errors_serialize_with_kind_tag() {
        let err = GuidepathError::StoreUnavailable("connection refused".into());
        let json = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(json["type"], "StoreUnavailable");
    }
}

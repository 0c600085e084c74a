//! User profile types
//!
//! Profiles live in the external document store, keyed by the identity's
//! `uid`. A profile is absent until the first save; absence is a valid state,
//! not an error. The wire format uses camelCase field names to match the
//! stored document schema.

use serde::{Deserialize, Serialize};

/// A user profile document.
///
/// Every field is a plain string; a field missing from the stored document
/// deserializes to an empty string, and the two are treated identically
/// everywhere (notably by the completeness rule).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserProfile {
    /// Mirrors the identity's email; immutable through the edit flow
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    /// Date of birth, free-form (the edit form submits ISO dates)
    pub dob: String,
    pub gender: String,
    pub education: String,
    /// Comma-separated skills
    pub skills: String,
    pub interests: String,
    pub career_goals: String,
}

/// A partial profile write.
///
/// `None` fields are omitted from the merge-write entirely, so the stored
/// values for those fields are preserved. This is the only mutation shape the
/// profile store accepts from the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
}

impl ProfilePatch {
    /// Apply this patch over an existing profile, field by field.
    ///
    /// Mirrors the document store's merge-write semantics so in-memory
    /// adapters and tests behave exactly like the real store.
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(v) = &self.email {
            profile.email = v.clone();
        }
        if let Some(v) = &self.first_name {
            profile.first_name = v.clone();
        }
        if let Some(v) = &self.last_name {
            profile.last_name = v.clone();
        }
        if let Some(v) = &self.dob {
            profile.dob = v.clone();
        }
        if let Some(v) = &self.gender {
            profile.gender = v.clone();
        }
        if let Some(v) = &self.education {
            profile.education = v.clone();
        }
        if let Some(v) = &self.skills {
            profile.skills = v.clone();
        }
        if let Some(v) = &self.interests {
            profile.interests = v.clone();
        }
        if let Some(v) = &self.career_goals {
            profile.career_goals = v.clone();
        }
    }
}

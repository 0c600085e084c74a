//! Profile completeness rule
//!
//! A pure predicate over a profile snapshot: no side effects, no external
//! calls, and it must never panic on a sparse document. Shared by the login
//! flow's "complete your profile" messaging and the recommendation selector,
//! and recomputed on every evaluation - the result is never cached.

use guidepath_domain::UserProfile;

/// Whether the profile has enough information for personalized
/// recommendations.
///
/// True iff `first_name`, `last_name`, and `skills` are all non-empty after
/// trimming. A field that was missing from the stored document deserializes
/// to an empty string and therefore counts as absent.
pub fn is_complete(profile: &UserProfile) -> bool {
    has_value(&profile.first_name) && has_value(&profile.last_name) && has_value(&profile.skills)
}

fn has_value(field: &str) -> bool {
    !field.trim().is_empty()
}

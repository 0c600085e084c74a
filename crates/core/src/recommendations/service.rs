//! Recommendation selector
//!
//! Two independent tracks run per dashboard view: set selection (which of
//! the two fixed lists to show) and record provisioning (ensure the
//! per-user recommendation record exists). A provisioning failure is
//! reported but never changes the already-decided set, so a transient store
//! fault on that side channel cannot block recommendation display.

use std::sync::Arc;

use guidepath_domain::{CourseRecommendation, GuidepathError, IdentityState, RecommendationTier};
use tracing::{debug, warn};

use crate::profile::completeness::is_complete;
use crate::profile::ports::ProfileRepository;

use super::catalog::{default_set, personalized_set};
use super::ports::RecommendationRepository;

/// Outcome of a selection.
///
/// Exactly one of the two fixed sets is always present; `error` carries the
/// degradation reason when the default set was a fallback rather than a
/// decision.
#[derive(Debug, Clone)]
pub struct Selection {
    /// Which fixed set was chosen
    pub tier: RecommendationTier,
    /// The chosen courses
    pub courses: Vec<CourseRecommendation>,
    /// Why the result degraded, if it did
    pub error: Option<GuidepathError>,
}

impl Selection {
    fn degraded(error: GuidepathError) -> Self {
        Self {
            tier: RecommendationTier::Default,
            courses: default_set().to_vec(),
            error: Some(error),
        }
    }
}

/// Recommendation selection service
pub struct RecommendationService {
    profiles: Arc<dyn ProfileRepository>,
    records: Arc<dyn RecommendationRepository>,
}

impl RecommendationService {
    /// Create a new recommendation service
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        records: Arc<dyn RecommendationRepository>,
    ) -> Self {
        Self { profiles, records }
    }

    /// Select the recommendation set for the given identity state.
    ///
    /// Without a signed-in identity no store access is attempted at all.
    /// Otherwise the profile decides the tier; a missing document or an
    /// unreachable store degrades to the default set so the view stays
    /// usable. Record provisioning runs independently afterwards and its
    /// failure is reported only when the selection itself succeeded.
    pub async fn select(&self, state: &IdentityState) -> Selection {
        let Some(identity) = state.identity() else {
            return Selection::degraded(GuidepathError::NotAuthenticated(
                "no signed-in identity".into(),
            ));
        };

        let (tier, mut error) = match self.profiles.fetch(&identity.uid).await {
            Ok(Some(profile)) => {
                let tier = if is_complete(&profile) {
                    RecommendationTier::Personalized
                } else {
                    RecommendationTier::Default
                };
                (tier, None)
            }
            Ok(None) => (
                RecommendationTier::Default,
                Some(GuidepathError::ProfileNotFound(identity.uid.clone())),
            ),
            Err(err) => (
                RecommendationTier::Default,
                Some(GuidepathError::ProfileFetchFailed(err.to_string())),
            ),
        };

        match self.records.ensure_record(&identity.uid).await {
            Ok(created) => {
                if created {
                    debug!(uid = %identity.uid, "recommendation record provisioned");
                }
            }
            Err(err) => {
                warn!(uid = %identity.uid, error = %err, "recommendation record provisioning failed");
                if error.is_none() {
                    error = Some(GuidepathError::RecommendationRecordInitFailed(err.to_string()));
                }
            }
        }

        let courses = match tier {
            RecommendationTier::Personalized => personalized_set().to_vec(),
            RecommendationTier::Default => default_set().to_vec(),
        };

        Selection { tier, courses, error }
    }
}

//! Domain data types

pub mod identity;
pub mod profile;
pub mod recommendation;

pub use identity::{IdentityState, UserIdentity};
pub use profile::{ProfilePatch, UserProfile};
pub use recommendation::{
    CatalogCourse, CourseRecommendation, RecommendationRecord, RecommendationTier,
};

//! Course recommendation types

use serde::{Deserialize, Serialize};

/// Which of the two fixed recommendation sets was selected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationTier {
    /// Shown when the profile is incomplete, absent, or unreadable
    Default,
    /// Shown when the profile is complete
    Personalized,
}

/// One recommended course as presented on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecommendation {
    pub title: String,
    pub summary: String,
    pub subject: String,
    pub level: String,
    pub course_type: String,
    pub price: String,
    pub course_url: String,
    /// Average rating in [0, 5]
    pub rating: f32,
}

/// Per-user recommendation record stored in the document store.
///
/// Provisioned lazily with an empty list on first dashboard view. It is never
/// read back into the selection logic; it exists as a write-only side channel
/// for future personalized content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Identifiers of recommended courses
    pub recommended_courses: Vec<String>,
}

/// One course in the seeded catalog collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogCourse {
    pub title: String,
    pub summary: String,
    pub subject: String,
    pub level: String,
    pub course_type: String,
    pub price: String,
    pub course_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_defaults_to_empty_course_list() {
        let record = RecommendationRecord::default();
        assert!(record.recommended_courses.is_empty());

        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json, serde_json::json!({ "recommended_courses": [] }));
    }

    #[test]
    fn tier_serializes_lowercase() {
        let json = serde_json::to_value(RecommendationTier::Personalized).expect("serialize tier");
        assert_eq!(json, serde_json::json!("personalized"));
    }
}

//! The two fixed recommendation sets
//!
//! Selection between these two lists is the only personalization in the
//! application. The contents are immutable; which one a user sees is decided
//! solely by the profile completeness rule.

use guidepath_domain::CourseRecommendation;
use once_cell::sync::Lazy;

static DEFAULT_SET: Lazy<Vec<CourseRecommendation>> = Lazy::new(|| {
    vec![
        CourseRecommendation {
            title: "Introduction to Data Science".into(),
            summary: "Learn the basics of data science including data visualization and machine learning.".into(),
            subject: "Data Science".into(),
            level: "Beginner".into(),
            course_type: "Online".into(),
            price: "Free".into(),
            course_url: "https://example.com/data-science".into(),
            rating: 4.5,
        },
        CourseRecommendation {
            title: "Web Development for Beginners".into(),
            summary: "Understand web development fundamentals with hands-on projects.".into(),
            subject: "Web Development".into(),
            level: "Beginner".into(),
            course_type: "Online".into(),
            price: "$50".into(),
            course_url: "https://example.com/web-development".into(),
            rating: 4.0,
        },
        CourseRecommendation {
            title: "Introduction to Machine Learning".into(),
            summary: "Explore machine learning techniques and build your first model.".into(),
            subject: "Machine Learning".into(),
            level: "Intermediate".into(),
            course_type: "Online".into(),
            price: "$75".into(),
            course_url: "https://example.com/machine-learning".into(),
            rating: 5.0,
        },
    ]
});

static PERSONALIZED_SET: Lazy<Vec<CourseRecommendation>> = Lazy::new(|| {
    vec![
        CourseRecommendation {
            title: "Advanced Data Analytics".into(),
            summary: "Dive deeper into data analysis and advanced techniques in Python.".into(),
            subject: "Data Science".into(),
            level: "Advanced".into(),
            course_type: "Online".into(),
            price: "$100".into(),
            course_url: "https://example.com/advanced-data-analytics".into(),
            rating: 4.8,
        },
        CourseRecommendation {
            title: "Full Stack Web Development".into(),
            summary: "Learn how to build full-stack web applications using React, Node, and MongoDB.".into(),
            subject: "Web Development".into(),
            level: "Intermediate".into(),
            course_type: "Online".into(),
            price: "$150".into(),
            course_url: "https://example.com/full-stack-web-dev".into(),
            rating: 4.7,
        },
        CourseRecommendation {
            title: "Deep Learning with TensorFlow".into(),
            summary: "Learn how to build neural networks and deep learning models using TensorFlow.".into(),
            subject: "Machine Learning".into(),
            level: "Advanced".into(),
            course_type: "Online".into(),
            price: "$120".into(),
            course_url: "https://example.com/deep-learning-tensorflow".into(),
            rating: 4.9,
        },
    ]
});

/// Recommendations shown when the profile is incomplete, absent, or could
/// not be read.
pub fn default_set() -> &'static [CourseRecommendation] {
    &DEFAULT_SET
}

/// Recommendations shown when the profile is complete.
pub fn personalized_set() -> &'static [CourseRecommendation] {
    &PERSONALIZED_SET
}

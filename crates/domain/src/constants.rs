//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Document store collections
pub const USERS_COLLECTION: &str = "users";
pub const RECOMMENDATIONS_COLLECTION: &str = "recommendations";
pub const COURSES_COLLECTION: &str = "courses";
pub const META_COLLECTION: &str = "meta";

// Marker document set once the course catalog upload has completed
pub const CATALOG_SEEDED_DOC_ID: &str = "courses_seeded";

// Routes
pub const HOME_ROUTE: &str = "/";
pub const SIGNUP_ROUTE: &str = "/signup";
pub const LOGIN_ROUTE: &str = "/login";
pub const PASSWORD_RESET_ROUTE: &str = "/password-reset";
pub const DASHBOARD_ROUTE: &str = "/dashboard";
pub const EDIT_PROFILE_ROUTE: &str = "/edit-profile";
pub const ASSESSMENT_ROUTE: &str = "/psychometric-assessment";

// Validation limits for profile free-text fields
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_FREETEXT_LENGTH: usize = 2000;

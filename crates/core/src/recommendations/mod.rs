//! Recommendation selection and record provisioning

pub mod catalog;
pub mod ports;
pub mod service;

pub use ports::RecommendationRepository;
pub use service::{RecommendationService, Selection};

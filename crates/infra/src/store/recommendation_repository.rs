//! Recommendation record repository over the document store

use std::sync::Arc;

use async_trait::async_trait;
use guidepath_core::RecommendationRepository;
use guidepath_domain::constants::RECOMMENDATIONS_COLLECTION;
use guidepath_domain::{GuidepathError, RecommendationRecord, Result};

use super::DocumentStore;

/// [`RecommendationRepository`] implementation over any [`DocumentStore`]
pub struct StoreRecommendationRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreRecommendationRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl RecommendationRepository for StoreRecommendationRepository {
    async fn record_exists(&self, uid: &str) -> Result<bool> {
        let doc = self.store.read_document(RECOMMENDATIONS_COLLECTION, uid).await?;
        Ok(doc.is_some())
    }

    async fn ensure_record(&self, uid: &str) -> Result<bool> {
        if self.record_exists(uid).await? {
            return Ok(false);
        }

        let record = serde_json::to_value(RecommendationRecord::default())
            .map_err(|e| GuidepathError::Internal(format!("failed to serialize record: {e}")))?;
        self.store.create_document(RECOMMENDATIONS_COLLECTION, uid, &record).await?;
        Ok(true)
    }
}

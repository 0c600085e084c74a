//! Profile repository over the document store

use std::sync::Arc;

use async_trait::async_trait;
use guidepath_core::ProfileRepository;
use guidepath_domain::constants::USERS_COLLECTION;
use guidepath_domain::{GuidepathError, ProfilePatch, Result, UserProfile};

use super::DocumentStore;

/// [`ProfileRepository`] implementation over any [`DocumentStore`]
pub struct StoreProfileRepository {
    store: Arc<dyn DocumentStore>,
}

impl StoreProfileRepository {
    /// Create a new repository instance
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for StoreProfileRepository {
    async fn fetch(&self, uid: &str) -> Result<Option<UserProfile>> {
        match self.store.read_document(USERS_COLLECTION, uid).await? {
            None => Ok(None),
            Some(fields) => {
                let profile = serde_json::from_value(fields).map_err(|e| {
                    GuidepathError::Internal(format!("malformed profile document for {uid}: {e}"))
                })?;
                Ok(Some(profile))
            }
        }
    }

    async fn save_merge(&self, uid: &str, patch: &ProfilePatch) -> Result<()> {
        let fields = serde_json::to_value(patch)
            .map_err(|e| GuidepathError::Internal(format!("failed to serialize patch: {e}")))?;
        self.store.write_document_merge(USERS_COLLECTION, uid, &fields).await
    }
}

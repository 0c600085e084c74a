//! In-memory document store
//!
//! Backs the `memory` backend for local development and tests. Mirrors the
//! REST adapter's semantics, including shallow merge-writes, and can be
//! switched into an "unavailable" mode to exercise degradation paths.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use guidepath_domain::{GuidepathError, Result};
use serde_json::Value;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::DocumentStore;

/// In-memory implementation of [`DocumentStore`]
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<(String, String), Value>>,
    unavailable: AtomicBool,
}

impl MemoryDocumentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the store being unreachable; every operation fails with
    /// `StoreUnavailable` until switched back.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Number of documents in a collection (test helper).
    pub async fn collection_len(&self, collection: &str) -> usize {
        self.documents
            .read()
            .await
            .keys()
            .filter(|(c, _)| c == collection)
            .count()
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(GuidepathError::StoreUnavailable("store marked unavailable".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn read_document(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        self.check_available()?;
        let documents = self.documents.read().await;
        Ok(documents.get(&(collection.to_string(), id.to_string())).cloned())
    }

    async fn write_document_merge(
        &self,
        collection: &str,
        id: &str,
        fields: &Value,
    ) -> Result<()> {
        self.check_available()?;
        let mut documents = self.documents.write().await;
        let entry = documents
            .entry((collection.to_string(), id.to_string()))
            .or_insert_with(|| Value::Object(serde_json::Map::new()));

        match (entry, fields) {
            (Value::Object(existing), Value::Object(incoming)) => {
                for (key, value) in incoming {
                    existing.insert(key.clone(), value.clone());
                }
                Ok(())
            }
            _ => Err(GuidepathError::StoreUnavailable(
                "merge-write requires object-shaped documents".into(),
            )),
        }
    }

    async fn create_document(&self, collection: &str, id: &str, fields: &Value) -> Result<()> {
        self.check_available()?;
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_string(), id.to_string()), fields.clone());
        Ok(())
    }

    async fn add_document(&self, collection: &str, fields: &Value) -> Result<String> {
        self.check_available()?;
        let id = Uuid::new_v4().to_string();
        let mut documents = self.documents.write().await;
        documents.insert((collection.to_string(), id.clone()), fields.clone());
        Ok(id)
    }
}

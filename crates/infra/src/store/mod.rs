//! Document store adapters and repositories
//!
//! The external document store is reached through the [`DocumentStore`]
//! trait; the core-facing repositories are implemented once over that trait
//! and work with any adapter (REST or in-memory).

pub mod memory;
pub mod profile_repository;
pub mod recommendation_repository;
pub mod rest;

use async_trait::async_trait;
use guidepath_domain::Result;
use serde_json::Value;

pub use profile_repository::StoreProfileRepository;
pub use recommendation_repository::StoreRecommendationRepository;

/// Raw document operations offered by the external store.
///
/// Documents are schemaless JSON objects addressed by `(collection, id)`.
/// A missing document reads as `Ok(None)`; only transport and server
/// failures are errors.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Read a document's fields.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport or server failure.
    async fn read_document(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// Merge the given fields into a document, creating it if absent.
    /// Fields not present in `fields` are preserved.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport or server failure.
    async fn write_document_merge(&self, collection: &str, id: &str, fields: &Value)
        -> Result<()>;

    /// Create a document at a known id, replacing nothing (the caller checks
    /// existence first).
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport or server failure.
    async fn create_document(&self, collection: &str, id: &str, fields: &Value) -> Result<()>;

    /// Add a document with a store-assigned id; returns that id.
    ///
    /// # Errors
    /// Returns `StoreUnavailable` on transport or server failure.
    async fn add_document(&self, collection: &str, fields: &Value) -> Result<String>;
}

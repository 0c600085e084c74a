//! Course-catalog seeding
//!
//! Uploads the bundled course catalog into the `courses` collection once.
//! A marker document records a completed upload; it is only written after
//! every course landed, so a failed run is retried on the next startup.

use std::path::Path;
use std::sync::Arc;

use guidepath_domain::constants::{CATALOG_SEEDED_DOC_ID, COURSES_COLLECTION, META_COLLECTION};
use guidepath_domain::{CatalogCourse, GuidepathError, Result};
use serde_json::json;
use tracing::{info, warn};

use crate::store::DocumentStore;

/// Catalog shipped with the application, used when no file path is
/// configured.
const BUNDLED_CATALOG: &str = include_str!("../../assets/course_catalog.json");

/// One-time course-catalog uploader
pub struct CatalogSeeder {
    store: Arc<dyn DocumentStore>,
}

impl CatalogSeeder {
    /// Create a new seeder over the given store
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Upload the catalog unless a previous run already completed.
    ///
    /// Returns the number of uploaded courses (0 when the marker exists).
    ///
    /// # Errors
    /// Returns `Config` when the catalog cannot be read or parsed and
    /// `StoreUnavailable` when the store rejects an upload. The marker is
    /// not written on failure.
    pub async fn seed_if_needed(&self, catalog_path: Option<&Path>) -> Result<usize> {
        if self
            .store
            .read_document(META_COLLECTION, CATALOG_SEEDED_DOC_ID)
            .await?
            .is_some()
        {
            info!("course catalog already seeded, skipping upload");
            return Ok(0);
        }

        let courses = load_catalog(catalog_path)?;
        let count = courses.len();

        for course in &courses {
            let fields = serde_json::to_value(course)
                .map_err(|e| GuidepathError::Internal(format!("failed to serialize course: {e}")))?;
            self.store.add_document(COURSES_COLLECTION, &fields).await?;
        }

        self.store
            .create_document(
                META_COLLECTION,
                CATALOG_SEEDED_DOC_ID,
                &json!({
                    "seededAt": chrono::Utc::now().to_rfc3339(),
                    "count": count,
                }),
            )
            .await?;

        info!(count, "course catalog seeded");
        Ok(count)
    }

    /// Run seeding, logging instead of failing; startup must not be blocked
    /// by an unreachable store.
    pub async fn seed_best_effort(&self, catalog_path: Option<&Path>) {
        if let Err(err) = self.seed_if_needed(catalog_path).await {
            warn!(error = %err, "course catalog seeding failed; will retry next startup");
        }
    }
}

fn load_catalog(catalog_path: Option<&Path>) -> Result<Vec<CatalogCourse>> {
    let raw = match catalog_path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            GuidepathError::Config(format!("failed to read catalog {}: {e}", path.display()))
        })?,
        None => BUNDLED_CATALOG.to_string(),
    };

    serde_json::from_str(&raw)
        .map_err(|e| GuidepathError::Config(format!("invalid course catalog: {e}")))
}

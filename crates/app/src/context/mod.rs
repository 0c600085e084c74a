//! Application context - dependency injection container

use std::sync::Arc;

use guidepath_core::{
    AccountService, IdentityGateway, ProfileRepository, ProfileService, RecommendationService,
};
use guidepath_domain::{BackendKind, Config, Result};
use guidepath_infra::{
    CatalogSeeder, DocumentStore, MemoryDocumentStore, MemoryIdentityGateway,
    RestDocumentStore, RestIdentityGateway, StoreProfileRepository,
    StoreRecommendationRepository,
};

/// Type alias for identity gateway trait object
type DynIdentityGateway = dyn IdentityGateway + 'static;

/// Type alias for profile repository trait object
type DynProfileRepository = dyn ProfileRepository + 'static;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub identity: Arc<DynIdentityGateway>,
    pub profiles: Arc<DynProfileRepository>,
    pub profile_service: Arc<ProfileService>,
    pub recommendation_service: Arc<RecommendationService>,
    pub accounts: Arc<AccountService>,
    pub seeder: Arc<CatalogSeeder>,
}

impl AppContext {
    /// Build a context with the adapters selected by `config.backend`.
    ///
    /// The identity gateway is initialized here: its first notification
    /// (`Absent`) is delivered before any request is served.
    ///
    /// # Errors
    /// Returns `Config` when a REST adapter cannot be constructed.
    pub fn from_config(config: Config) -> Result<Self> {
        let (store, identity): (Arc<dyn DocumentStore>, Arc<DynIdentityGateway>) =
            match config.backend {
                BackendKind::Memory => {
                    let gateway = MemoryIdentityGateway::new();
                    gateway.initialize();
                    (Arc::new(MemoryDocumentStore::new()), Arc::new(gateway))
                }
                BackendKind::Rest => {
                    let gateway = RestIdentityGateway::new(&config.identity)?;
                    gateway.initialize();
                    (Arc::new(RestDocumentStore::new(&config.store)?), Arc::new(gateway))
                }
            };

        Ok(Self::with_adapters(config, store, identity))
    }

    /// Build a context over explicit adapters (used by tests and by callers
    /// that manage adapter lifecycles themselves).
    pub fn with_adapters(
        config: Config,
        store: Arc<dyn DocumentStore>,
        identity: Arc<DynIdentityGateway>,
    ) -> Self {
        let profiles: Arc<DynProfileRepository> =
            Arc::new(StoreProfileRepository::new(Arc::clone(&store)));
        let records = Arc::new(StoreRecommendationRepository::new(Arc::clone(&store)));

        let profile_service =
            Arc::new(ProfileService::new(Arc::clone(&profiles), Arc::clone(&identity)));
        let recommendation_service =
            Arc::new(RecommendationService::new(Arc::clone(&profiles), records));
        let accounts =
            Arc::new(AccountService::new(Arc::clone(&identity), Arc::clone(&profiles)));
        let seeder = Arc::new(CatalogSeeder::new(store));

        Self {
            config,
            identity,
            profiles,
            profile_service,
            recommendation_service,
            accounts,
            seeder,
        }
    }

    /// Run startup catalog seeding when enabled, without blocking startup on
    /// a store failure.
    pub async fn seed_catalog(&self) {
        if !self.config.seed.enabled {
            return;
        }
        let path = self.config.seed.catalog_path.as_ref().map(std::path::PathBuf::from);
        self.seeder.seed_best_effort(path.as_deref()).await;
    }
}

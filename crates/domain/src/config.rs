//! Application configuration structures
//!
//! Plain data structures only; loading (environment variables, config files)
//! lives in the infra crate.

use serde::{Deserialize, Serialize};

/// Which set of adapters backs the capability interfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// In-memory identity gateway and document store. No network access;
    /// suitable for local development and tests.
    Memory,
    /// REST identity gateway and document store backed by the external
    /// backend-as-a-service.
    Rest,
}

impl Default for BackendKind {
    fn default() -> Self {
        Self::Memory
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Socket address the application listens on (e.g. "127.0.0.1:8080")
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind_addr: "127.0.0.1:8080".to_string() }
    }
}

/// Document store (external service) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the document store REST API
    pub base_url: String,
    /// API key sent with every request
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9090/v1".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Identity gateway (external service) configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Base URL of the identity provider REST API
    pub base_url: String,
    /// API key sent with every request
    pub api_key: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:9091/v1".to_string(),
            api_key: None,
            timeout_secs: 30,
        }
    }
}

/// Course-catalog seeding configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Whether startup seeding is attempted at all
    pub enabled: bool,
    /// Optional path to a catalog JSON file; the bundled catalog is used
    /// when unset
    pub catalog_path: Option<String>,
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Adapter selection for the external collaborators
    #[serde(default)]
    pub backend: BackendKind,
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Document store settings
    #[serde(default)]
    pub store: StoreConfig,
    /// Identity gateway settings
    #[serde(default)]
    pub identity: IdentityConfig,
    /// Course-catalog seeding settings
    #[serde(default)]
    pub seed: SeedConfig,
}

//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. If no file is found, falls back to built-in defaults (in-memory
//!    backend, loopback bind address)
//!
//! ## Environment Variables
//! - `GUIDEPATH_BIND_ADDR`: socket address the server listens on
//! - `GUIDEPATH_BACKEND`: `memory` or `rest`
//! - `GUIDEPATH_STORE_BASE_URL`: document store REST base URL
//! - `GUIDEPATH_STORE_API_KEY`: document store API key
//! - `GUIDEPATH_STORE_TIMEOUT_SECS`: per-request store timeout
//! - `GUIDEPATH_IDENTITY_BASE_URL`: identity gateway REST base URL
//! - `GUIDEPATH_IDENTITY_API_KEY`: identity gateway API key
//! - `GUIDEPATH_IDENTITY_TIMEOUT_SECS`: per-request gateway timeout
//! - `GUIDEPATH_SEED_ENABLED`: whether startup catalog seeding runs
//! - `GUIDEPATH_SEED_CATALOG`: path to a catalog JSON file
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.toml` or `./config.json`
//! 2. `./guidepath.toml` or `./guidepath.json`
//! 3. The same names in the parent directory

use std::path::{Path, PathBuf};

use guidepath_domain::{
    BackendKind, Config, GuidepathError, IdentityConfig, Result, SeedConfig, ServerConfig,
    StoreConfig,
};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If the bind address is
/// not set there, falls back to a config file; if no file is found either,
/// built-in defaults are used.
///
/// # Errors
/// Returns `GuidepathError::Config` if a config file exists but cannot be
/// parsed, or if an environment variable has an invalid value.
pub fn load() -> Result<Config> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment configuration incomplete, trying file");
            match load_from_file(None) {
                Ok(config) => Ok(config),
                Err(GuidepathError::Config(msg)) if msg.contains("no config file") => {
                    tracing::info!("no configuration found, using built-in defaults");
                    Ok(Config::default())
                }
                Err(e) => Err(e),
            }
        }
    }
}

/// Load configuration from environment variables
///
/// `GUIDEPATH_BIND_ADDR` must be present; every other variable falls back to
/// its default.
///
/// # Errors
/// Returns `GuidepathError::Config` if `GUIDEPATH_BIND_ADDR` is missing or
/// another variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let bind_addr = env_var("GUIDEPATH_BIND_ADDR")?;

    let backend = match std::env::var("GUIDEPATH_BACKEND").ok().as_deref() {
        None => BackendKind::default(),
        Some("memory") => BackendKind::Memory,
        Some("rest") => BackendKind::Rest,
        Some(other) => {
            return Err(GuidepathError::Config(format!(
                "invalid GUIDEPATH_BACKEND '{other}' (expected 'memory' or 'rest')"
            )))
        }
    };

    let store_defaults = StoreConfig::default();
    let identity_defaults = IdentityConfig::default();

    Ok(Config {
        backend,
        server: ServerConfig { bind_addr },
        store: StoreConfig {
            base_url: std::env::var("GUIDEPATH_STORE_BASE_URL")
                .unwrap_or(store_defaults.base_url),
            api_key: std::env::var("GUIDEPATH_STORE_API_KEY").ok(),
            timeout_secs: env_u64("GUIDEPATH_STORE_TIMEOUT_SECS", store_defaults.timeout_secs)?,
        },
        identity: IdentityConfig {
            base_url: std::env::var("GUIDEPATH_IDENTITY_BASE_URL")
                .unwrap_or(identity_defaults.base_url),
            api_key: std::env::var("GUIDEPATH_IDENTITY_API_KEY").ok(),
            timeout_secs: env_u64(
                "GUIDEPATH_IDENTITY_TIMEOUT_SECS",
                identity_defaults.timeout_secs,
            )?,
        },
        seed: SeedConfig {
            enabled: env_bool("GUIDEPATH_SEED_ENABLED", false),
            catalog_path: std::env::var("GUIDEPATH_SEED_CATALOG").ok(),
        },
    })
}

/// Load configuration from a file
///
/// When `path` is `None` the standard locations are probed.
///
/// # Errors
/// Returns `GuidepathError::Config` when no file is found or the file cannot
/// be parsed.
pub fn load_from_file(path: Option<&Path>) -> Result<Config> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => probe_config_paths()
            .ok_or_else(|| GuidepathError::Config("no config file found".into()))?,
    };

    let contents = std::fs::read_to_string(&path).map_err(|e| {
        GuidepathError::Config(format!("failed to read {}: {e}", path.display()))
    })?;

    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|e| GuidepathError::Config(format!("invalid TOML in {}: {e}", path.display())))?,
        Some("json") => serde_json::from_str(&contents)
            .map_err(|e| GuidepathError::Config(format!("invalid JSON in {}: {e}", path.display())))?,
        other => {
            return Err(GuidepathError::Config(format!(
                "unsupported config format {other:?} for {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    const NAMES: [&str; 4] = ["config.toml", "config.json", "guidepath.toml", "guidepath.json"];

    for dir in [".", ".."] {
        for name in NAMES {
            let candidate = Path::new(dir).join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| GuidepathError::Config(format!("missing environment variable {name}")))
}

fn env_u64(name: &str, default: u64) -> Result<u64> {
    match std::env::var(name) {
        Err(_) => Ok(default),
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|e| GuidepathError::Config(format!("invalid {name}: {e}"))),
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name).ok().as_deref() {
        Some("1") | Some("true") | Some("yes") => true,
        Some("0") | Some("false") | Some("no") => false,
        _ => default,
    }
}

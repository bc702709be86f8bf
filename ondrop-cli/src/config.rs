//! Configuration file.
//!
//! Stored as JSON at `<config dir>/ondrop/config.json`. A missing file means
//! defaults; unknown keys are ignored.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use ondrop_fetch::{FetchSettings, Headers};
use ondrop_retailers::{RetailerDescriptor, RetailerOptions};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Per-store settings, keyed by CLI name.
    #[serde(default)]
    pub stores: BTreeMap<String, StoreConfig>,
}

/// General settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Store used when `--store` is not given.
    #[serde(default = "default_store")]
    pub default_store: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Log level when `--verbose` is not given.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Domains requests may go to. Absent allows all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_domains: Option<Vec<String>>,
}

/// Per-store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Whether lookups against this store are allowed.
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Replaces the storefront origin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Merged over the store's default headers.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: Headers,
}

fn default_store() -> String {
    "tnf".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_store: default_store(),
            timeout_secs: default_timeout_secs(),
            log_level: default_log_level(),
            allowed_domains: None,
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            base_url: None,
            headers: Headers::new(),
        }
    }
}

impl Config {
    /// Returns the default configuration directory.
    pub fn default_dir() -> PathBuf {
        dirs::config_dir()
            .map(|c| c.join("ondrop"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Returns the default configuration file path.
    pub fn default_path() -> PathBuf {
        Self::default_dir().join("config.json")
    }

    /// Loads configuration from a path, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Saves configuration to a path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;

        info!(path = %path.display(), "Saved configuration");
        Ok(())
    }

    /// Finds the entry for a store by its CLI name or any alias.
    pub fn store(&self, desc: &RetailerDescriptor) -> Option<&StoreConfig> {
        self.stores.iter().find_map(|(key, store)| {
            let matches = key.eq_ignore_ascii_case(desc.cli.name)
                || desc.cli.aliases.iter().any(|a| key.eq_ignore_ascii_case(a));
            matches.then_some(store)
        })
    }

    /// Returns whether a store is enabled. Stores without an entry are.
    pub fn is_store_enabled(&self, desc: &RetailerDescriptor) -> bool {
        self.store(desc).is_none_or(|s| s.enabled)
    }

    /// Builds the retailer overrides for a store.
    pub fn retailer_options(&self, desc: &RetailerDescriptor) -> RetailerOptions {
        self.store(desc)
            .map(|s| RetailerOptions {
                base_url: s.base_url.clone(),
                extra_headers: s.headers.clone(),
            })
            .unwrap_or_default()
    }

    /// Builds the fetch settings.
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            allowed_domains: self.general.allowed_domains.clone(),
            ..FetchSettings::default()
        }
        .with_timeout(Duration::from_secs(self.general.timeout_secs))
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Site settings for the synchronizers.
//!
//! Sources are merged in order, later overriding earlier:
//! 1. built-in defaults
//! 2. a TOML file (`storesync.toml` in the working directory unless a path is given)
//! 3. environment variables prefixed with `STORESYNC_` (e.g. `STORESYNC_STORE_ID`)

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use storesync_core::StoreId;
use storesync_sync::ConfigProvider;

pub const DEFAULT_CONFIG_FILENAME: &str = "storesync.toml";
pub const DEFAULT_ENV_PREFIX: &str = "STORESYNC";
pub const DEFAULT_PLATFORM: &str = "storesync";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] figment::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncSettings {
    /// Unset until the merchant has registered a store.
    pub store_id: Option<StoreId>,
    pub site_base_url: String,
    pub product_image_field: Option<String>,
    /// Platform tag sent when creating or updating the store.
    pub platform: String,
}

impl Default for SyncSettings {
    fn default() -> Self {
        Self {
            store_id: None,
            site_base_url: "http://localhost".to_string(),
            product_image_field: None,
            platform: DEFAULT_PLATFORM.to_string(),
        }
    }
}

impl SyncSettings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(store_id) = &self.store_id {
            if store_id.as_str().trim().is_empty() {
                return Err(ConfigError::Invalid("store_id cannot be blank".to_string()));
            }
        }
        let url = self.site_base_url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "site_base_url must be an absolute http(s) URL, got '{}'",
                self.site_base_url
            )));
        }
        if self.platform.trim().is_empty() {
            return Err(ConfigError::Invalid("platform cannot be blank".to_string()));
        }
        Ok(())
    }
}

impl ConfigProvider for SyncSettings {
    fn store_id(&self) -> Option<StoreId> {
        self.store_id.clone()
    }

    fn site_base_url(&self) -> String {
        self.site_base_url.clone()
    }

    fn product_image_field(&self) -> Option<String> {
        self.product_image_field.clone()
    }
}

#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    pub fn load(&self) -> Result<SyncSettings, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(SyncSettings::default()));

        let path = self
            .config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILENAME));
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading configuration file");
            figment = figment.merge(Toml::file(&path));
        } else if self.config_path.is_some() {
            tracing::warn!(path = %path.display(), "configuration file not found, using defaults");
        }

        // Keys are flat, so no nested-key split.
        figment = figment.merge(Env::prefixed(&format!("{}_", self.env_prefix)));

        let settings: SyncSettings = figment.extract()?;
        settings.validate()?;

        tracing::info!(
            store_configured = settings.store_id.is_some(),
            site_base_url = %settings.site_base_url,
            "configuration loaded"
        );
        Ok(settings)
    }
}

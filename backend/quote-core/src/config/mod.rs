use crate::error::config::ConfigError;
use crate::storage::validate_key;
use crate::{COMMERCIAL_FORM_STORAGE_KEY, DEFAULT_ALERT_REVEAL_DELAY_MS, HOME_FORM_STORAGE_KEY};

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;
const APP_DIR_NAME: &str = "agency-site";
const STORAGE_DIR_NAME: &str = "storage";
const MAX_REVEAL_DELAY_MS: u64 = 5_000;

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StorageConfig {
    /// Overrides the platform data directory
    pub directory: Option<String>,
    #[serde(default = "default_commercial_key")]
    pub commercial_key: String,
    #[serde(default = "default_home_key")]
    pub home_key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            directory: None,
            commercial_key: default_commercial_key(),
            home_key: default_home_key(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AlertConfig {
    #[serde(default = "default_reveal_delay_ms")]
    pub reveal_delay_ms: u64,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            reveal_delay_ms: default_reveal_delay_ms(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub alerts: AlertConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            storage: StorageConfig::default(),
            alerts: AlertConfig::default(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_commercial_key() -> String {
    COMMERCIAL_FORM_STORAGE_KEY.to_string()
}
fn default_home_key() -> String {
    HOME_FORM_STORAGE_KEY.to_string()
}
fn default_reveal_delay_ms() -> u64 {
    DEFAULT_ALERT_REVEAL_DELAY_MS
}

// ============================================
// IMPLEMENTATION
// ============================================

impl SiteConfig {
    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(SiteConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: SiteConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation,
    /// serialization, write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if self.alerts.reveal_delay_ms > MAX_REVEAL_DELAY_MS {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid alert reveal delay: {}ms (must be at most {}ms)",
                    self.alerts.reveal_delay_ms, MAX_REVEAL_DELAY_MS
                ),
            });
        }

        for (name, key) in [
            ("commercial_key", &self.storage.commercial_key),
            ("home_key", &self.storage.home_key),
        ] {
            if let Err(e) = validate_key(key) {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("storage.{name}: {e}"),
                });
            }
        }

        if self.storage.commercial_key == self.storage.home_key {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Form stores cannot share storage key '{}'",
                    self.storage.home_key
                ),
            });
        }

        if let Some(ref directory) = self.storage.directory {
            if directory.is_empty() {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: "storage.directory cannot be empty string".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Directory holding the persisted forms.
    ///
    /// The configured override wins; otherwise `{data_local_dir}/agency-site/storage`.
    /// `None` when the platform has no data directory.
    pub fn storage_directory(&self) -> Option<PathBuf> {
        match self.storage.directory {
            Some(ref directory) => Some(PathBuf::from(directory)),
            None => dirs::data_local_dir()
                .map(|base| base.join(APP_DIR_NAME).join(STORAGE_DIR_NAME)),
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.alerts.reveal_delay_ms)
    }
}

/// Default config directory: `{config_dir}/agency-site`.
pub fn default_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|base| base.join(APP_DIR_NAME))
}

use crate::ICONIK_API_BASE_URL;
use crate::credentials::HOST_ENV;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "iconik";
const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

const MIB: u64 = 1024 * 1024;
/// Smallest part B2 accepts in a large-file upload.
pub const B2_MIN_PART_SIZE: u64 = 5 * MIB;
/// Largest part B2 accepts in a large-file upload.
pub const B2_MAX_PART_SIZE: u64 = 5 * 1024 * MIB;
/// Files strictly larger than this go through the B2 multipart flow.
pub const MULTIPART_FILESIZE_THRESHOLD: u64 = 100 * MIB;
pub const DEFAULT_TAG_FIELD: &str = "metadata._gcvi_tags";
const MAX_PER_PAGE: u32 = 500;

// ============================================
// CONFIG STRUCT
// ============================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,

    #[serde(default = "default_multipart_threshold")]
    pub multipart_threshold_bytes: u64,

    #[serde(default = "default_multipart_threshold")]
    pub multipart_part_size_bytes: u64,

    #[serde(default = "default_tag_field")]
    pub tag_field: String,

    #[serde(default = "default_search_per_page")]
    pub search_per_page: u32,

    #[serde(default = "default_request_keyframes")]
    pub request_keyframes: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            host: default_host(),
            timeout_secs: default_timeout_secs(),
            upload_timeout_secs: default_upload_timeout_secs(),
            multipart_threshold_bytes: default_multipart_threshold(),
            multipart_part_size_bytes: default_multipart_threshold(),
            tag_field: default_tag_field(),
            search_per_page: default_search_per_page(),
            request_keyframes: default_request_keyframes(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_host() -> String {
    ICONIK_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_upload_timeout_secs() -> u64 {
    3600
}
fn default_multipart_threshold() -> u64 {
    MULTIPART_FILESIZE_THRESHOLD
}
fn default_tag_field() -> String {
    DEFAULT_TAG_FIELD.to_string()
}
fn default_search_per_page() -> u32 {
    50
}
fn default_request_keyframes() -> bool {
    true
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// `{config_dir}/iconik`, e.g. `~/.config/iconik` on Linux.
    #[track_caller]
    pub fn default_dir() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME))
            .ok_or_else(|| ConfigError::DirectoryNotFound {
                location: ErrorLocation::from(Location::caller()),
            })
    }

    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ClientConfig)` if loaded successfully or defaults if the file is missing.
    /// Returns `Err(ConfigError)` if the file exists but is corrupted/invalid.
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

        let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
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

    /// Save config to {config_dir}/config.json using atomic write (temp file + rename).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
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

    /// Apply a host override from an explicit value or `ICONIK_HOST`.
    pub fn with_host_override(mut self, host: Option<String>) -> Self {
        let host = host
            .filter(|h| !h.trim().is_empty())
            .or_else(|| std::env::var(HOST_ENV).ok().filter(|h| !h.trim().is_empty()));

        if let Some(host) = host {
            self.host = host;
        }
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn upload_timeout(&self) -> Duration {
        Duration::from_secs(self.upload_timeout_secs)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(validation_error(format!(
                "Invalid version: {} (expected 1-{})",
                self.version, CONFIG_VERSION
            )));
        }

        if self.host.is_empty() {
            return Err(validation_error("host cannot be empty string".to_string()));
        }

        if !self.host.starts_with("http://") && !self.host.starts_with("https://") {
            return Err(validation_error(format!(
                "Invalid host URL format: {}",
                self.host
            )));
        }

        if self.timeout_secs == 0 || self.upload_timeout_secs == 0 {
            return Err(validation_error("timeouts must be at least 1 second".to_string()));
        }

        if !(B2_MIN_PART_SIZE..=B2_MAX_PART_SIZE).contains(&self.multipart_part_size_bytes) {
            return Err(validation_error(format!(
                "Invalid multipart part size: {} (must be {}-{} bytes)",
                self.multipart_part_size_bytes, B2_MIN_PART_SIZE, B2_MAX_PART_SIZE
            )));
        }

        if self.multipart_threshold_bytes < self.multipart_part_size_bytes {
            return Err(validation_error(format!(
                "Multipart threshold {} is below the part size {}",
                self.multipart_threshold_bytes, self.multipart_part_size_bytes
            )));
        }

        if self.tag_field.trim().is_empty() {
            return Err(validation_error("tag_field cannot be empty".to_string()));
        }

        if self.search_per_page == 0 || self.search_per_page > MAX_PER_PAGE {
            return Err(validation_error(format!(
                "Invalid search_per_page: {} (must be 1-{})",
                self.search_per_page, MAX_PER_PAGE
            )));
        }

        Ok(())
    }
}

#[track_caller]
fn validation_error(reason: String) -> ConfigError {
    ConfigError::ValidationError {
        location: ErrorLocation::from(Location::caller()),
        reason,
    }
}

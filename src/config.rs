//! Configuration module for zencloud.

use serde::Deserialize;
use std::path::Path;

use crate::{Result, ZencloudError};

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port number to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_db_path")]
    pub path: String,
}

fn default_db_path() -> String {
    "data/zencloud.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

/// Blob storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path to the upload directory.
    #[serde(default = "default_storage_path")]
    pub path: String,
    /// Maximum upload size in megabytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_mb: u64,
}

fn default_storage_path() -> String {
    "data/uploads".to_string()
}

fn default_max_upload_size() -> u64 {
    640
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            max_upload_size_mb: default_max_upload_size(),
        }
    }
}

/// Cross-origin policy configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// The single origin allowed to call the API.
    #[serde(default = "default_allowed_origin")]
    pub allowed_origin: String,
}

fn default_allowed_origin() -> String {
    "http://localhost:5173".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin: default_allowed_origin(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/zencloud.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database configuration.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Blob storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Cross-origin policy configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ZencloudError::Io)?;
        Self::parse(&content)
    }

    /// Load configuration from a TOML file and apply environment variable overrides.
    pub fn load_with_env<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).map_err(|e| ZencloudError::Config(format!("config parse error: {e}")))
    }

    /// Apply environment variable overrides to the configuration.
    ///
    /// Supported environment variables:
    /// - `ZENCLOUD_DATABASE_PATH`: Override the SQLite database path
    pub fn apply_env_overrides(&mut self) {
        if let Ok(db_path) = std::env::var("ZENCLOUD_DATABASE_PATH") {
            if !db_path.is_empty() {
                self.database.path = db_path;
            }
        }
    }

    /// Validate the configuration.
    ///
    /// Returns an error if:
    /// - The upload size cap is zero (every upload would be rejected)
    pub fn validate(&self) -> Result<()> {
        if self.storage.max_upload_size_mb == 0 {
            return Err(ZencloudError::Config(
                "storage.max_upload_size_mb must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Upload size cap in bytes.
    pub fn max_upload_size_bytes(&self) -> u64 {
        self.storage.max_upload_size_mb * 1024 * 1024
    }
}

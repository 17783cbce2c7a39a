//! Application configuration structs
//!
//! Loads configuration from environment variables and an optional .env file.

use serde::Deserialize;
use std::env;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub backend: BackendConfig,
    pub storage: StorageConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default = "default_env")]
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

/// Hosted backend configuration (relational store, auth, storage share one host)
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the hosted backend, e.g. `https://project.example.co`
    pub url: String,
    /// Publishable API key sent with every request
    pub api_key: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

/// Object storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_bucket")]
    pub bucket: String,
    #[serde(default = "default_max_file_size_mib")]
    pub max_file_size_mib: u32,
}

impl StorageConfig {
    /// Upload size ceiling in bytes
    #[must_use]
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mib as usize * 1024 * 1024
    }
}

// Default value functions
fn default_app_name() -> String {
    "avito-gallery".to_string()
}

fn default_env() -> Environment {
    Environment::Development
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_bucket() -> String {
    "campaign-media".to_string()
}

fn default_max_file_size_mib() -> u32 {
    5
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if required environment variables are missing
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: env::var("APP_ENV")
                    .ok()
                    .and_then(|s| match s.to_lowercase().as_str() {
                        "production" => Some(Environment::Production),
                        "staging" => Some(Environment::Staging),
                        "development" => Some(Environment::Development),
                        _ => None,
                    })
                    .unwrap_or_default(),
            },
            backend: BackendConfig {
                url: env::var("BACKEND_URL").map_err(|_| ConfigError::MissingVar("BACKEND_URL"))?,
                api_key: env::var("BACKEND_API_KEY")
                    .map_err(|_| ConfigError::MissingVar("BACKEND_API_KEY"))?,
                request_timeout_secs: env::var("BACKEND_REQUEST_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_request_timeout_secs),
            },
            storage: StorageConfig {
                bucket: env::var("STORAGE_BUCKET").unwrap_or_else(|_| default_bucket()),
                max_file_size_mib: env::var("STORAGE_MAX_FILE_SIZE_MIB")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or_else(default_max_file_size_mib),
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}

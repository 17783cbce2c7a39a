//! Application configuration

mod app_config;

pub use app_config::{
    AppConfig, AppSettings, BackendConfig, ConfigError, Environment, StorageConfig,
};

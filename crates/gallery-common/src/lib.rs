//! # gallery-common
//!
//! Shared utilities: environment-based configuration, access-token claim
//! introspection, and tracing setup.

pub mod auth;
pub mod config;
pub mod telemetry;

pub use auth::{AccessClaims, TokenError};
pub use config::{AppConfig, ConfigError};
pub use telemetry::{init_tracing, try_init_tracing, TracingConfig};

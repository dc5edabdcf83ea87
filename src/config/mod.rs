//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `COOKIE_COTTAGE` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use cookie_cottage::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Cart snapshot path: {}", config.storage.cart_path);
//! ```

mod catalog;
mod error;
mod storage;

pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has usable defaults: with no environment set, the
/// storefront runs in demo mode with a local cart snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Catalog source configuration (product API, demo mode)
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Cart snapshot storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `COOKIE_COTTAGE` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `COOKIE_COTTAGE__CATALOG__API_KEY=...` -> `catalog.api_key = ...`
    /// - `COOKIE_COTTAGE__STORAGE__CART_PATH=...` -> `storage.cart_path = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("COOKIE_COTTAGE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.catalog.validate()?;
        self.storage.validate()?;
        Ok(())
    }
}

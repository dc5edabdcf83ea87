//! Catalog source configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_base_url() -> String {
    "https://services.leadconnectorhq.com".to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_max_retries() -> u32 {
    2
}

/// Catalog source configuration (sales-platform product API)
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Product API key; absent or placeholder values select demo mode
    pub api_key: Option<String>,

    /// Sales-platform location id
    pub location_id: Option<String>,

    /// Product API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Maximum retries on transient failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            location_id: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_retries: default_max_retries(),
        }
    }
}

impl CatalogConfig {
    /// Check whether the built-in catalog should be served instead of
    /// calling the product API.
    ///
    /// Demo mode is selected when credentials are missing or still hold
    /// the placeholder values from the sample environment file.
    pub fn demo_mode(&self) -> bool {
        let placeholder = |value: &Option<String>| match value {
            None => true,
            Some(v) => v.is_empty() || v.contains("YOUR_"),
        };
        placeholder(&self.api_key) || placeholder(&self.location_id)
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidBaseUrl);
        }
        if self.timeout_secs == 0 {
            return Err(ValidationError::InvalidTimeout);
        }
        Ok(())
    }
}

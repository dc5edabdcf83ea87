//! Cart storage configuration

use serde::Deserialize;

use super::error::ValidationError;

fn default_cart_path() -> String {
    ".cookie-cottage/cart.json".to_string()
}

/// Cart snapshot storage configuration
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Path of the cart snapshot file
    #[serde(default = "default_cart_path")]
    pub cart_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            cart_path: default_cart_path(),
        }
    }
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.cart_path.is_empty() {
            return Err(ValidationError::EmptyCartPath);
        }
        Ok(())
    }
}

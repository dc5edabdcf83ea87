//! Catalog source port - external product data fetch.
//!
//! Any failure here is recoverable: the session falls back to the
//! built-in catalog so the storefront stays usable offline.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{Flavor, PackOption};

/// Product data returned by a catalog source.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogData {
    pub flavors: Vec<Flavor>,
    pub pack_options: Vec<PackOption>,
}

/// Errors raised by catalog source implementations.
#[derive(Debug, Clone, Error)]
pub enum CatalogSourceError {
    /// The source could not be reached.
    #[error("Catalog source transport error: {0}")]
    Transport(String),

    /// The source answered but reported failure.
    #[error("Catalog source unavailable: {reason}")]
    Unavailable { reason: String },

    /// The source answered with data that does not form a valid catalog.
    #[error("Catalog source returned an invalid payload: {0}")]
    InvalidPayload(String),
}

impl CatalogSourceError {
    pub fn transport(message: impl Into<String>) -> Self {
        CatalogSourceError::Transport(message.into())
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        CatalogSourceError::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn invalid_payload(message: impl Into<String>) -> Self {
        CatalogSourceError::InvalidPayload(message.into())
    }
}

/// Port for fetching product reference data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches the current flavors and pack options.
    async fn fetch_products(&self) -> Result<CatalogData, CatalogSourceError>;
}

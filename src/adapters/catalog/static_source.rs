//! Static catalog source.
//!
//! Serves a fixed dataset without touching the network. Used for demo
//! mode (no product API credentials configured) and for tests.

use async_trait::async_trait;

use crate::domain::catalog::{default_flavors, default_pack_options, Flavor, PackOption};
use crate::ports::{CatalogData, CatalogSource, CatalogSourceError};

/// Catalog source returning a fixed in-memory dataset.
#[derive(Debug, Clone)]
pub struct StaticCatalogSource {
    flavors: Vec<Flavor>,
    pack_options: Vec<PackOption>,
}

impl StaticCatalogSource {
    /// Creates a source serving the built-in dataset.
    pub fn built_in() -> Self {
        Self {
            flavors: default_flavors(),
            pack_options: default_pack_options(),
        }
    }

    /// Creates a source serving the given dataset.
    pub fn with_data(flavors: Vec<Flavor>, pack_options: Vec<PackOption>) -> Self {
        Self {
            flavors,
            pack_options,
        }
    }
}

impl Default for StaticCatalogSource {
    fn default() -> Self {
        Self::built_in()
    }
}

#[async_trait]
impl CatalogSource for StaticCatalogSource {
    async fn fetch_products(&self) -> Result<CatalogData, CatalogSourceError> {
        Ok(CatalogData {
            flavors: self.flavors.clone(),
            pack_options: self.pack_options.clone(),
        })
    }
}

//! HTTP catalog source.
//!
//! Fetches product data from the bakery's sales-platform product API.
//! Transient failures are retried with a linear backoff; callers treat
//! any final error as a signal to fall back to the built-in catalog.
//!
//! # Configuration
//!
//! ```ignore
//! let config = HttpCatalogSourceConfig::new(api_key)
//!     .with_base_url("https://services.leadconnectorhq.com");
//!
//! let source = HttpCatalogSource::new(config);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use std::time::Duration;
use tokio::time::sleep;

use crate::domain::catalog::{Flavor, FlavorCategory, PackOption};
use crate::domain::foundation::{FlavorId, Money, PackOptionId};
use crate::ports::{CatalogData, CatalogSource, CatalogSourceError};

/// API version header the product service expects.
const API_VERSION: &str = "2021-07-28";

/// Configuration for the HTTP catalog source.
#[derive(Debug, Clone)]
pub struct HttpCatalogSourceConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Base URL for the product API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl HttpCatalogSourceConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            base_url: "https://services.leadconnectorhq.com".to_string(),
            timeout: Duration::from_secs(15),
            max_retries: 2,
        }
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Exposes the API key (for making requests).
    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Catalog source backed by the product API.
pub struct HttpCatalogSource {
    config: HttpCatalogSourceConfig,
    client: Client,
}

impl HttpCatalogSource {
    /// Creates a new HTTP catalog source with the given configuration.
    pub fn new(config: HttpCatalogSourceConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { config, client }
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.config.base_url)
    }

    async fn fetch_once(&self) -> Result<ProductsResponse, CatalogSourceError> {
        let response = self
            .client
            .get(self.products_url())
            .bearer_auth(self.config.api_key())
            .header("Version", API_VERSION)
            .send()
            .await
            .map_err(|e| CatalogSourceError::transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(CatalogSourceError::transport(format!(
                "Product API call failed: {}",
                response.status()
            )));
        }

        response
            .json::<ProductsResponse>()
            .await
            .map_err(|e| CatalogSourceError::invalid_payload(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_products(&self) -> Result<CatalogData, CatalogSourceError> {
        let mut attempt = 0;
        let response = loop {
            match self.fetch_once().await {
                Ok(response) => break response,
                Err(CatalogSourceError::Transport(reason)) if attempt < self.config.max_retries => {
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        %reason,
                        "product API call failed, retrying"
                    );
                    sleep(Duration::from_secs(attempt as u64)).await;
                }
                Err(err) => return Err(err),
            }
        };

        if !response.success {
            return Err(CatalogSourceError::unavailable(
                response
                    .error
                    .unwrap_or_else(|| "product API reported failure".to_string()),
            ));
        }

        let products = response.products.ok_or_else(|| {
            CatalogSourceError::invalid_payload("product API succeeded without products")
        })?;
        products.try_into()
    }
}

// === Wire DTOs ===

#[derive(Debug, Deserialize)]
struct ProductsResponse {
    success: bool,
    #[serde(default)]
    products: Option<ProductsPayload>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductsPayload {
    #[serde(default)]
    flavors: Vec<FlavorRecord>,
    #[serde(default)]
    pack_options: Vec<PackOptionRecord>,
}

#[derive(Debug, Deserialize)]
struct FlavorRecord {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_category")]
    category: String,
    #[serde(default)]
    calories: String,
    #[serde(default)]
    surcharge: Option<f64>,
}

fn default_category() -> String {
    "classic".to_string()
}

#[derive(Debug, Deserialize)]
struct PackOptionRecord {
    id: String,
    name: String,
    price: f64,
    size: u32,
}

impl TryFrom<ProductsPayload> for CatalogData {
    type Error = CatalogSourceError;

    fn try_from(payload: ProductsPayload) -> Result<Self, Self::Error> {
        let mut flavors = Vec::with_capacity(payload.flavors.len());
        for record in payload.flavors {
            let flavor = Flavor::new(
                FlavorId::new(record.id),
                record.name,
                FlavorCategory::from(record.category),
                record.description,
                record.calories,
            )
            .map_err(|e| CatalogSourceError::invalid_payload(e.to_string()))?;
            flavors.push(match record.surcharge {
                Some(dollars) => flavor.with_surcharge(Money::from_dollars(dollars)),
                None => flavor,
            });
        }

        let mut pack_options = Vec::with_capacity(payload.pack_options.len());
        for record in payload.pack_options {
            let id = PackOptionId::new(record.id)
                .map_err(|e| CatalogSourceError::invalid_payload(e.to_string()))?;
            let pack = PackOption::new(id, record.name, Money::from_dollars(record.price), record.size)
                .map_err(|e| CatalogSourceError::invalid_payload(e.to_string()))?;
            pack_options.push(pack);
        }

        Ok(CatalogData {
            flavors,
            pack_options,
        })
    }
}

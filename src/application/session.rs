//! StorefrontSession - per-session composition root.
//!
//! Owns one catalog, one pack builder, and one cart service for the
//! lifetime of a browsing session. Replaces the module-level mutable
//! state the original storefront pages kept: scope is explicit, from
//! session start to session end (or narrower in tests).

use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::adapters::catalog::{HttpCatalogSource, HttpCatalogSourceConfig, StaticCatalogSource};
use crate::adapters::storage::FileCartStore;
use crate::config::AppConfig;
use crate::domain::cart::LineItem;
use crate::domain::catalog::Catalog;
use crate::domain::foundation::LineItemId;
use crate::domain::pack::{PackBuilder, PackError};
use crate::ports::{CartStore, CatalogSource};

use super::{CartError, CartService};

/// Errors raised by composed session operations.
#[derive(Debug, Clone, Error)]
pub enum SessionError {
    #[error(transparent)]
    Pack(#[from] PackError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Fetches the catalog from a source, falling back to the built-in
/// dataset on any failure so the storefront stays usable offline.
pub async fn load_catalog(source: &dyn CatalogSource) -> Catalog {
    match source.fetch_products().await {
        Ok(data) => match Catalog::new(data.flavors, data.pack_options) {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::warn!(error = %err, "catalog source returned invalid data, using built-in catalog");
                Catalog::built_in()
            }
        },
        Err(err) => {
            tracing::warn!(error = %err, "catalog source unavailable, using built-in catalog");
            Catalog::built_in()
        }
    }
}

/// One customer's browsing session: catalog, pack builder, cart.
pub struct StorefrontSession {
    catalog: Arc<Catalog>,
    builder: PackBuilder,
    cart: CartService,
}

impl StorefrontSession {
    /// Creates a session over an already-loaded catalog and a cart store.
    ///
    /// The cart starts unloaded; call [`CartService::load`] via
    /// [`Self::cart_mut`] (or use [`Self::bootstrap`]).
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn CartStore>) -> Self {
        Self {
            builder: PackBuilder::new(Arc::clone(&catalog)),
            cart: CartService::new(store),
            catalog,
        }
    }

    /// Builds a ready-to-use session from configuration: picks the
    /// catalog source (static in demo mode, HTTP otherwise), loads the
    /// catalog with fallback, and reads any persisted cart.
    pub async fn bootstrap(config: &AppConfig) -> Self {
        let catalog = if config.catalog.demo_mode() {
            tracing::info!("catalog running in demo mode with built-in products");
            load_catalog(&StaticCatalogSource::built_in()).await
        } else {
            let http_config =
                HttpCatalogSourceConfig::new(config.catalog.api_key.clone().unwrap_or_default())
                    .with_base_url(config.catalog.base_url.clone())
                    .with_timeout(Duration::from_secs(config.catalog.timeout_secs))
                    .with_max_retries(config.catalog.max_retries);
            load_catalog(&HttpCatalogSource::new(http_config)).await
        };

        let store = Arc::new(FileCartStore::new(&config.storage.cart_path));
        let mut session = Self::new(Arc::new(catalog), store);
        session.cart.load().await;
        session
    }

    /// The session's catalog.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The pack builder.
    pub fn builder(&mut self) -> &mut PackBuilder {
        &mut self.builder
    }

    /// The cart service (read-only).
    pub fn cart(&self) -> &CartService {
        &self.cart
    }

    /// The cart service.
    pub fn cart_mut(&mut self) -> &mut CartService {
        &mut self.cart
    }

    /// Commits the completed pack selection and adds it to the cart.
    ///
    /// Returns the new line item's id.
    ///
    /// # Errors
    ///
    /// - Pack errors if the selection is missing or incomplete (the
    ///   selection is left intact)
    /// - Cart errors if the snapshot write fails (the item is in the
    ///   cart regardless)
    pub async fn commit_pack_to_cart(&mut self) -> Result<LineItemId, SessionError> {
        let item = self.builder.commit()?;
        let id = item.id.clone();
        self.cart.add_line_item(LineItem::Pack(item)).await?;
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryCartStore;
    use crate::domain::foundation::{FlavorId, Money, PackOptionId};
    use crate::domain::pack::FlavorDelta;
    use crate::ports::{CatalogData, CatalogSourceError};
    use async_trait::async_trait;

    fn session() -> StorefrontSession {
        StorefrontSession::new(
            Arc::new(Catalog::built_in()),
            Arc::new(InMemoryCartStore::new()),
        )
    }

    struct BrokenSource;

    #[async_trait]
    impl CatalogSource for BrokenSource {
        async fn fetch_products(&self) -> Result<CatalogData, CatalogSourceError> {
            Err(CatalogSourceError::transport("connection refused"))
        }
    }

    #[tokio::test]
    async fn broken_source_falls_back_to_built_in_catalog() {
        let catalog = load_catalog(&BrokenSource).await;
        assert_eq!(catalog, Catalog::built_in());
    }

    #[tokio::test]
    async fn healthy_source_provides_the_catalog() {
        let source = StaticCatalogSource::with_data(
            Catalog::built_in().flavors()[..2].to_vec(),
            Catalog::built_in().pack_options().to_vec(),
        );
        let catalog = load_catalog(&source).await;
        assert_eq!(catalog.flavors().len(), 2);
    }

    #[tokio::test]
    async fn build_and_commit_lands_in_the_cart() {
        let mut session = session();
        session.cart_mut().load().await;

        let pack_id = PackOptionId::new("4pack").unwrap();
        session.builder().start_pack(&pack_id).unwrap();
        for _ in 0..4 {
            session
                .builder()
                .set_flavor_delta(FlavorId::new(1), FlavorDelta::Increment)
                .unwrap();
        }

        let id = session.commit_pack_to_cart().await.unwrap();
        assert_eq!(session.cart().items().len(), 1);
        assert_eq!(session.cart().items()[0].id(), &id);
        assert_eq!(session.cart().total_value(), Money::from_dollars(18.99));
    }

    #[tokio::test]
    async fn committing_an_incomplete_pack_is_rejected() {
        let mut session = session();
        session.cart_mut().load().await;

        let pack_id = PackOptionId::new("4pack").unwrap();
        session.builder().start_pack(&pack_id).unwrap();

        let result = session.commit_pack_to_cart().await;
        assert!(matches!(
            result,
            Err(SessionError::Pack(PackError::IncompletePack { remaining: 4 }))
        ));
        assert!(session.cart().items().is_empty());
    }
}

//! Catalog source adapters.

mod http;
mod static_source;

pub use http::{HttpCatalogSource, HttpCatalogSourceConfig};
pub use static_source::StaticCatalogSource;

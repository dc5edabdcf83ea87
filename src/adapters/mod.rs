//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - cart snapshot stores (in-memory, local JSON file)
//! - `catalog` - product sources (built-in static data, HTTP)
//! - `gateway` - order submission (demo mode)

pub mod catalog;
pub mod gateway;
pub mod storage;

pub use catalog::{HttpCatalogSource, HttpCatalogSourceConfig, StaticCatalogSource};
pub use gateway::DemoOrderGateway;
pub use storage::{FileCartStore, InMemoryCartStore};

//! Catalog - Immutable reference data for the storefront.
//!
//! Cookie flavors and pack options are loaded once per session, either
//! from the built-in dataset or from an external product source, and are
//! never mutated afterwards.

mod catalog;
mod defaults;
mod flavor;
mod pack_option;

pub use catalog::Catalog;
pub use defaults::{default_flavors, default_pack_options, SINGLE_COOKIE_PRICE};
pub use flavor::{Flavor, FlavorCategory};
pub use pack_option::PackOption;

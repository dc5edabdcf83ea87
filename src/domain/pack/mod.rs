//! Pack builder - composing a fixed-size pack one cookie at a time.
//!
//! Governs a single in-progress pack selection: quantities accumulate
//! through unit increments until the pack's capacity is reached, at
//! which point the selection can be committed into a cart line item.

mod builder;
mod errors;

pub use builder::{FlavorDelta, PackBuilder, PackSelection};
pub use errors::PackError;

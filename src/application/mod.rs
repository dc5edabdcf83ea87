//! Application layer - services and command handlers.
//!
//! Wires domain components to the ports: the cart service persists the
//! cart aggregate after every mutation, the storefront session is the
//! per-session composition root, and handlers orchestrate multi-step
//! commands in the domain's terms.

pub mod handlers;

mod cart_service;
mod session;

pub use cart_service::{CartError, CartService};
pub use session::{load_catalog, SessionError, StorefrontSession};

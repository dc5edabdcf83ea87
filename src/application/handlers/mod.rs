//! Command handlers.

mod submit_order;

pub use submit_order::{SubmitOrderCommand, SubmitOrderHandler};

//! Cookie Cottage - Storefront Cart & Pack Builder
//!
//! This crate implements the ordering core of an artisan cookie bakery
//! storefront: catalog reference data, fixed-size pack composition, and
//! the durable shopping cart with its persistence and order-submission
//! boundaries.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;

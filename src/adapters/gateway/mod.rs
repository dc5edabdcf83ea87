//! Order gateway adapters.

mod demo;

pub use demo::DemoOrderGateway;

//! Order gateway port - submission into the sales pipeline.
//!
//! The production gateway creates a contact and an opportunity in the
//! CRM; that client lives outside this crate. The port carries only
//! what the storefront needs back: the order number and the created
//! record ids.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::OrderNumber;
use crate::domain::order::OrderPayload;

/// Confirmation returned by a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    /// The order number the customer is shown.
    pub order_number: OrderNumber,

    /// CRM contact id, when one was created.
    pub contact_id: Option<String>,

    /// Pipeline opportunity id, when one was created.
    pub opportunity_id: Option<String>,

    /// Human-readable confirmation message.
    pub message: Option<String>,
}

/// Errors raised by order gateway implementations.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The gateway could not be reached.
    #[error("Order gateway transport error: {0}")]
    Transport(String),

    /// The gateway rejected the order.
    #[error("Order rejected: {reason}")]
    Rejected { reason: String },
}

impl GatewayError {
    pub fn transport(message: impl Into<String>) -> Self {
        GatewayError::Transport(message.into())
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        GatewayError::Rejected {
            reason: reason.into(),
        }
    }
}

/// Port for submitting a completed order.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    /// Submits the order, returning the confirmation receipt.
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, GatewayError>;
}

//! Order submission error types.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while assembling or submitting an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The cart has no items; there is nothing to order.
    #[error("Cannot submit an order with an empty cart")]
    EmptyCart,

    /// The order gateway refused or failed to accept the order.
    #[error("Order gateway error: {reason}")]
    Gateway { reason: String },

    /// The cart could not be persisted after submission.
    #[error("Cart persistence error: {reason}")]
    Persistence { reason: String },
}

impl OrderError {
    pub fn gateway(reason: impl Into<String>) -> Self {
        OrderError::Gateway {
            reason: reason.into(),
        }
    }

    pub fn persistence(reason: impl Into<String>) -> Self {
        OrderError::Persistence {
            reason: reason.into(),
        }
    }

    /// Returns the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            OrderError::EmptyCart => ErrorCode::EmptyCart,
            OrderError::Gateway { .. } => ErrorCode::GatewayError,
            OrderError::Persistence { .. } => ErrorCode::StorageError,
        }
    }
}

impl From<OrderError> for DomainError {
    fn from(err: OrderError) -> Self {
        DomainError::new(err.code(), err.to_string())
    }
}

//! Demo order gateway.
//!
//! Accepts every order locally, the behavior the storefront falls back
//! to when no sales-platform credentials are configured. Captures
//! submissions so tests can assert on what would have been sent.
//!
//! # Panics
//!
//! Methods may panic if the internal lock is poisoned. Acceptable for
//! demo/test use; a production gateway lives outside this crate.

use async_trait::async_trait;
use std::sync::Mutex;
use uuid::Uuid;

use crate::domain::foundation::OrderNumber;
use crate::domain::order::OrderPayload;
use crate::ports::{GatewayError, OrderGateway, OrderReceipt};

/// Gateway that confirms orders without leaving the process.
#[derive(Debug, Default)]
pub struct DemoOrderGateway {
    submissions: Mutex<Vec<OrderPayload>>,
}

impl DemoOrderGateway {
    /// Creates a new demo gateway.
    pub fn new() -> Self {
        Self::default()
    }

    // === Test Helpers ===

    /// All captured submissions, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn submissions(&self) -> Vec<OrderPayload> {
        self.submissions
            .lock()
            .expect("DemoOrderGateway: submissions lock poisoned")
            .clone()
    }

    /// Number of captured submissions.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn submission_count(&self) -> usize {
        self.submissions
            .lock()
            .expect("DemoOrderGateway: submissions lock poisoned")
            .len()
    }
}

#[async_trait]
impl OrderGateway for DemoOrderGateway {
    async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, GatewayError> {
        let order_number = payload
            .order_number
            .clone()
            .unwrap_or_else(OrderNumber::generate);

        self.submissions
            .lock()
            .expect("DemoOrderGateway: submissions lock poisoned")
            .push(payload.clone());

        tracing::info!(order_number = %order_number, total = %payload.total_value, "demo order accepted");

        Ok(OrderReceipt {
            order_number,
            contact_id: Some(format!("demo_contact_{}", Uuid::new_v4().simple())),
            opportunity_id: Some(format!("demo_opp_{}", Uuid::new_v4().simple())),
            message: Some("Demo: Order successfully submitted!".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::Cart;
    use crate::domain::order::CustomerDetails;

    fn payload() -> OrderPayload {
        let customer = CustomerDetails::new(
            "Jamie",
            "Rivera",
            "jamie@example.com",
            "555-0134",
            "12 Main St",
            "Springfield",
            "62704",
        )
        .unwrap();
        OrderPayload::new(customer, &Cart::new())
    }

    #[tokio::test]
    async fn submission_returns_generated_order_number() {
        let gateway = DemoOrderGateway::new();
        let receipt = gateway.submit_order(&payload()).await.unwrap();

        assert!(receipt.order_number.as_str().starts_with("CC-"));
        assert!(receipt.contact_id.unwrap().starts_with("demo_contact_"));
        assert!(receipt.opportunity_id.unwrap().starts_with("demo_opp_"));
    }

    #[tokio::test]
    async fn preassigned_order_number_is_kept() {
        let gateway = DemoOrderGateway::new();
        let number = OrderNumber::new("CC-FIXED123").unwrap();
        let payload = payload().with_order_number(number.clone());

        let receipt = gateway.submit_order(&payload).await.unwrap();
        assert_eq!(receipt.order_number, number);
    }

    #[tokio::test]
    async fn submissions_are_captured_in_order() {
        let gateway = DemoOrderGateway::new();
        gateway.submit_order(&payload()).await.unwrap();
        gateway.submit_order(&payload()).await.unwrap();

        assert_eq!(gateway.submission_count(), 2);
    }
}

//! SubmitOrderHandler - Command handler for checking out the cart.

use std::sync::Arc;

use crate::application::CartService;
use crate::domain::order::{CustomerDetails, OrderError, OrderPayload};
use crate::ports::{OrderGateway, OrderReceipt};

/// Command to submit the current cart as an order.
#[derive(Debug, Clone)]
pub struct SubmitOrderCommand {
    pub customer: CustomerDetails,
}

/// Handler for order submission.
pub struct SubmitOrderHandler {
    gateway: Arc<dyn OrderGateway>,
}

impl SubmitOrderHandler {
    pub fn new(gateway: Arc<dyn OrderGateway>) -> Self {
        Self { gateway }
    }

    /// Submits the cart's contents as an order.
    ///
    /// The cart is cleared only after the gateway confirms the
    /// submission, so a failed submission leaves the cart intact for a
    /// retry.
    ///
    /// # Errors
    ///
    /// - `OrderError::EmptyCart` when there is nothing to order
    /// - `OrderError::Gateway` when the gateway refuses or fails
    /// - `OrderError::Persistence` when the post-submission clear
    ///   cannot be persisted
    pub async fn handle(
        &self,
        cmd: SubmitOrderCommand,
        cart: &mut CartService,
    ) -> Result<OrderReceipt, OrderError> {
        // 1. Refuse an empty cart
        if cart.total_item_count() == 0 {
            return Err(OrderError::EmptyCart);
        }

        // 2. Assemble the payload from the cart as it stands
        let payload = OrderPayload::new(cmd.customer, cart.aggregate());

        // 3. Submit through the gateway
        let receipt = self
            .gateway
            .submit_order(&payload)
            .await
            .map_err(|e| OrderError::gateway(e.to_string()))?;

        // 4. Clear the cart now that the order is confirmed
        cart.clear()
            .await
            .map_err(|e| OrderError::persistence(e.to_string()))?;

        tracing::info!(
            order_number = %receipt.order_number,
            total_items = payload.total_items,
            total = %payload.total_value,
            "order submitted"
        );

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::gateway::DemoOrderGateway;
    use crate::adapters::storage::InMemoryCartStore;
    use crate::domain::cart::{LineItem, SimpleLineItem};
    use crate::domain::foundation::{LineItemId, Money};
    use crate::ports::GatewayError;
    use async_trait::async_trait;

    fn customer() -> CustomerDetails {
        CustomerDetails::new(
            "Jamie",
            "Rivera",
            "jamie@example.com",
            "555-0134",
            "12 Main St",
            "Springfield",
            "62704",
        )
        .unwrap()
    }

    async fn cart_with_items() -> CartService {
        let mut cart = CartService::new(Arc::new(InMemoryCartStore::new()));
        cart.load().await;
        cart.add_line_item(LineItem::Simple(SimpleLineItem::new(
            LineItemId::new("1").unwrap(),
            "Chocolate Chip Cookie",
            Money::from_dollars(3.50),
            2,
        )))
        .await
        .unwrap();
        cart
    }

    // ════════════════════════════════════════════════════════════════
    // Mock Implementations
    // ════════════════════════════════════════════════════════════════

    struct RejectingGateway;

    #[async_trait]
    impl OrderGateway for RejectingGateway {
        async fn submit_order(
            &self,
            _payload: &crate::domain::order::OrderPayload,
        ) -> Result<OrderReceipt, GatewayError> {
            Err(GatewayError::rejected("pipeline unavailable"))
        }
    }

    #[tokio::test]
    async fn empty_cart_is_refused() {
        let handler = SubmitOrderHandler::new(Arc::new(DemoOrderGateway::new()));
        let mut cart = CartService::new(Arc::new(InMemoryCartStore::new()));
        cart.load().await;

        let result = handler
            .handle(SubmitOrderCommand { customer: customer() }, &mut cart)
            .await;
        assert_eq!(result.unwrap_err(), OrderError::EmptyCart);
    }

    #[tokio::test]
    async fn successful_submission_clears_the_cart() {
        let gateway = Arc::new(DemoOrderGateway::new());
        let handler = SubmitOrderHandler::new(Arc::clone(&gateway) as Arc<dyn OrderGateway>);
        let mut cart = cart_with_items().await;

        let receipt = handler
            .handle(SubmitOrderCommand { customer: customer() }, &mut cart)
            .await
            .unwrap();

        assert!(receipt.order_number.as_str().starts_with("CC-"));
        assert!(cart.items().is_empty());
        assert!(cart.is_loaded());
        assert_eq!(gateway.submission_count(), 1);
    }

    #[tokio::test]
    async fn submitted_payload_carries_cart_totals() {
        let gateway = Arc::new(DemoOrderGateway::new());
        let handler = SubmitOrderHandler::new(Arc::clone(&gateway) as Arc<dyn OrderGateway>);
        let mut cart = cart_with_items().await;

        handler
            .handle(SubmitOrderCommand { customer: customer() }, &mut cart)
            .await
            .unwrap();

        let payload = &gateway.submissions()[0];
        assert_eq!(payload.total_items, 2);
        assert_eq!(payload.total_value, Money::from_dollars(7.00));
        assert_eq!(payload.customer.first_name, "Jamie");
    }

    #[tokio::test]
    async fn rejected_submission_keeps_the_cart() {
        let handler = SubmitOrderHandler::new(Arc::new(RejectingGateway));
        let mut cart = cart_with_items().await;

        let result = handler
            .handle(SubmitOrderCommand { customer: customer() }, &mut cart)
            .await;

        assert!(matches!(result, Err(OrderError::Gateway { .. })));
        assert_eq!(cart.items().len(), 1);
    }
}

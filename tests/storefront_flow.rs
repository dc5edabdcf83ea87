//! End-to-end storefront flow: browse, build a pack, check out.
//!
//! Follows one customer through the whole ordering path the UI drives:
//! pick a pack size, fill it flavor by flavor, adjust the cart, submit
//! the order, and come back to an empty cart.

use std::sync::Arc;

use cookie_cottage::adapters::gateway::DemoOrderGateway;
use cookie_cottage::adapters::storage::FileCartStore;
use cookie_cottage::application::handlers::{SubmitOrderCommand, SubmitOrderHandler};
use cookie_cottage::application::{CartService, StorefrontSession};
use cookie_cottage::domain::catalog::Catalog;
use cookie_cottage::domain::foundation::{FlavorId, Money, PackOptionId};
use cookie_cottage::domain::order::{CustomerDetails, OrderError};
use cookie_cottage::domain::pack::FlavorDelta;
use cookie_cottage::ports::OrderGateway;
use tempfile::tempdir;

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
    .with_special_instructions("Ring the side door bell")
}

fn fill(session: &mut StorefrontSession, flavor: u32, count: u32) {
    for _ in 0..count {
        session
            .builder()
            .set_flavor_delta(FlavorId::new(flavor), FlavorDelta::Increment)
            .unwrap();
    }
}

#[tokio::test]
async fn full_order_flow_ends_with_an_empty_persisted_cart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cart.json");

    let mut session = StorefrontSession::new(
        Arc::new(Catalog::built_in()),
        Arc::new(FileCartStore::new(&path)),
    );
    session.cart_mut().load().await;

    // Build a 4-pack: three chocolate chip, one vanilla
    let four_pack = PackOptionId::new("4pack").unwrap();
    session.builder().start_pack(&four_pack).unwrap();
    fill(&mut session, 1, 3);
    fill(&mut session, 2, 1);
    assert_eq!(session.builder().remaining_slots().unwrap(), 0);
    session.commit_pack_to_cart().await.unwrap();

    // And a 6-pack of lemon zest, doubled at the cart
    let six_pack = PackOptionId::new("6pack").unwrap();
    session.builder().start_pack(&six_pack).unwrap();
    fill(&mut session, 6, 6);
    let six_pack_line = session.commit_pack_to_cart().await.unwrap();
    session
        .cart_mut()
        .set_quantity(&six_pack_line, 2)
        .await
        .unwrap();

    // 1 x 18.99 + 2 x 24.99
    assert_eq!(session.cart().total_item_count(), 3);
    assert_eq!(session.cart().total_value(), Money::from_cents(6897));

    // Checkout
    let gateway = Arc::new(DemoOrderGateway::new());
    let handler = SubmitOrderHandler::new(Arc::clone(&gateway) as Arc<dyn OrderGateway>);
    let receipt = handler
        .handle(
            SubmitOrderCommand { customer: customer() },
            session.cart_mut(),
        )
        .await
        .unwrap();

    assert!(receipt.order_number.as_str().starts_with("CC-"));
    assert!(session.cart().items().is_empty());

    let payload = &gateway.submissions()[0];
    assert_eq!(payload.total_items, 3);
    assert_eq!(payload.total_value, Money::from_cents(6897));
    assert_eq!(payload.items.len(), 2);
    assert_eq!(
        payload.customer.special_instructions.as_deref(),
        Some("Ring the side door bell")
    );

    // A fresh session sees the cleared cart, not a stale one
    let mut next_session = CartService::new(Arc::new(FileCartStore::new(&path)));
    next_session.load().await;
    assert!(next_session.is_loaded());
    assert!(next_session.items().is_empty());
}

#[tokio::test]
async fn abandoned_builds_never_touch_the_cart() {
    let dir = tempdir().unwrap();
    let mut session = StorefrontSession::new(
        Arc::new(Catalog::built_in()),
        Arc::new(FileCartStore::new(dir.path().join("cart.json"))),
    );
    session.cart_mut().load().await;

    let four_pack = PackOptionId::new("4pack").unwrap();
    session.builder().start_pack(&four_pack).unwrap();
    fill(&mut session, 1, 2);
    session.builder().cancel();

    // Starting over mid-build also discards silently
    session.builder().start_pack(&four_pack).unwrap();
    fill(&mut session, 3, 1);
    session.builder().start_pack(&four_pack).unwrap();

    assert!(session.cart().items().is_empty());
    assert_eq!(session.builder().remaining_slots().unwrap(), 4);
}

#[tokio::test]
async fn checkout_with_an_empty_cart_is_refused() {
    let dir = tempdir().unwrap();
    let mut cart = CartService::new(Arc::new(FileCartStore::new(
        dir.path().join("cart.json"),
    )));
    cart.load().await;

    let handler = SubmitOrderHandler::new(Arc::new(DemoOrderGateway::new()));
    let result = handler
        .handle(SubmitOrderCommand { customer: customer() }, &mut cart)
        .await;

    assert_eq!(result.unwrap_err(), OrderError::EmptyCart);
}

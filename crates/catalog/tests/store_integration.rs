//! Integration tests for the catalog store against the full seed data.

use std::collections::HashSet;

use catalog::{CancelOutcome, CatalogStore, CreateOutcome, OrderStatus};
use common::{Money, OrderId, ProductId};

#[tokio::test]
async fn seeded_products_are_returned_exactly() {
    let store = CatalogStore::with_seed_data();
    assert_eq!(store.product_count().await, 15);

    let parka = store.get_product(&ProductId::new("201")).await.unwrap();
    assert_eq!(parka.name, "Men's Parka Jacket");
    assert_eq!(parka.price, Money::from_units(150));
    assert_eq!(parka.category.as_deref(), Some("Men's Winter Clothing"));

    assert!(store.get_product(&ProductId::new("999")).await.is_none());
}

#[tokio::test]
async fn delivery_status_projects_seeded_orders() {
    let store = CatalogStore::with_seed_data();

    let shipped = store.delivery_status(&OrderId::new("1")).await.unwrap();
    assert_eq!(shipped.status, OrderStatus::Shipped);
    assert_eq!(
        shipped.delivery_date.unwrap().to_string(),
        "2024-09-01"
    );

    let processing = store.delivery_status(&OrderId::new("2")).await.unwrap();
    assert_eq!(processing.status, OrderStatus::Processing);
    assert!(processing.delivery_date.is_none());

    assert!(store.delivery_status(&OrderId::new("404")).await.is_none());
}

#[tokio::test]
async fn cancel_never_transitions_shipped_or_delivered() {
    let store = CatalogStore::with_seed_data();

    // Order 1 is shipped, order 3 is delivered.
    for (id, status) in [("1", OrderStatus::Shipped), ("3", OrderStatus::Delivered)] {
        let id = OrderId::new(id);
        let outcome = store.cancel_order(&id).await.unwrap();
        assert_eq!(outcome, CancelOutcome::Refused { status });
        assert_eq!(store.get_order(&id).await.unwrap().status, status);
    }
}

#[tokio::test]
async fn cancel_is_idempotent_in_effect_after_first_success() {
    let store = CatalogStore::with_seed_data();
    let id = OrderId::new("5");

    let first = store.cancel_order(&id).await.unwrap();
    assert!(matches!(first, CancelOutcome::Cancelled(_)));

    let second = store.cancel_order(&id).await.unwrap();
    assert_eq!(
        second,
        CancelOutcome::Refused {
            status: OrderStatus::Canceled
        }
    );
    assert_eq!(
        store.get_order(&id).await.unwrap().status,
        OrderStatus::Canceled
    );
}

#[tokio::test]
async fn create_order_from_single_query_resolves_first_match() {
    let store = CatalogStore::with_seed_data();

    let CreateOutcome::Created(order) = store.create_order(&["Parka".to_string()]).await else {
        panic!("expected creation");
    };
    assert_eq!(order.product_ids, vec![ProductId::new("201")]);
    assert_eq!(order.total_price, Money::from_units(150));
    assert_eq!(order.status, OrderStatus::Processing);
    assert!(order.delivery_date.is_none());

    // The created order is retrievable under its generated id.
    let stored = store.get_order(&order.id).await.unwrap();
    assert_eq!(stored, order);
}

#[tokio::test]
async fn create_order_with_no_resolvable_products_stores_nothing() {
    let store = CatalogStore::with_seed_data();
    let before = store.order_count().await;

    let outcome = store
        .create_order(&["no-such-item-xyz".to_string()])
        .await;
    assert_eq!(outcome, CreateOutcome::NoMatches);
    assert_eq!(store.order_count().await, before);
}

#[tokio::test]
async fn search_is_case_insensitive_substring_over_the_whole_catalog() {
    let store = CatalogStore::with_seed_data();

    let gloves = store.search_products("glove").await;
    let names: Vec<_> = gloves.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Women's Leather Gloves", "Men's Waterproof Gloves"]
    );

    let jackets = store.search_products("JACKET").await;
    assert_eq!(jackets.len(), 4);

    assert!(store.search_products("surfboard").await.is_empty());
}

#[tokio::test]
async fn sequential_creates_never_collide() {
    let store = CatalogStore::with_seed_data();
    let before = store.order_count().await;

    let mut ids = HashSet::new();
    for _ in 0..1_000 {
        let CreateOutcome::Created(order) = store.create_order(&["Beanie".to_string()]).await
        else {
            panic!("expected creation");
        };
        assert!(ids.insert(order.id));
    }
    assert_eq!(store.order_count().await, before + 1_000);
}

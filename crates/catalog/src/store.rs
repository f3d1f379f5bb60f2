//! The catalog store: authoritative owner of the product and order maps.

use std::collections::BTreeMap;
use std::sync::Arc;

use common::{Money, OrderId, ProductId};
use tokio::sync::RwLock;

use crate::error::CatalogError;
use crate::order::{DeliveryStatus, Order};
use crate::product::Product;
use crate::seed;
use crate::status::OrderStatus;

/// Outcome of a cancellation attempt on an existing order.
#[derive(Debug, Clone, PartialEq)]
pub enum CancelOutcome {
    /// The order was in `processing` and is now `canceled`.
    Cancelled(Order),
    /// The order had already left `processing`; nothing was mutated.
    Refused { status: OrderStatus },
}

/// Outcome of an order-creation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// At least one query resolved; the order was stored.
    Created(Order),
    /// No query matched any product; nothing was stored.
    NoMatches,
}

#[derive(Debug, Default)]
struct CatalogInner {
    products: BTreeMap<ProductId, Product>,
    orders: BTreeMap<OrderId, Order>,
}

/// In-memory catalog store.
///
/// Cloneable handle over shared state. All read-modify-write operations
/// (`cancel_order`, `create_order`) hold the write lock for their full
/// duration, so two concurrent cancels of the same order cannot both
/// observe `processing`, and two concurrent creates cannot store under the
/// same id.
#[derive(Clone, Default)]
pub struct CatalogStore {
    inner: Arc<RwLock<CatalogInner>>,
}

impl CatalogStore {
    /// Creates a store from explicit seed collections.
    pub fn new(products: Vec<Product>, orders: Vec<Order>) -> Self {
        let inner = CatalogInner {
            products: products.into_iter().map(|p| (p.id.clone(), p)).collect(),
            orders: orders.into_iter().map(|o| (o.id.clone(), o)).collect(),
        };
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Creates a store preloaded with the storefront seed catalog.
    pub fn with_seed_data() -> Self {
        Self::new(seed::seed_products(), seed::seed_orders())
    }

    /// Returns the number of products in the catalog.
    pub async fn product_count(&self) -> usize {
        self.inner.read().await.products.len()
    }

    /// Returns the number of orders in the catalog.
    pub async fn order_count(&self) -> usize {
        self.inner.read().await.orders.len()
    }

    /// Looks up a product by exact id.
    pub async fn get_product(&self, id: &ProductId) -> Option<Product> {
        self.inner.read().await.products.get(id).cloned()
    }

    /// Looks up an order by exact id.
    pub async fn get_order(&self, id: &OrderId) -> Option<Order> {
        self.inner.read().await.orders.get(id).cloned()
    }

    /// Projects an order onto its delivery status. Pure read.
    pub async fn delivery_status(&self, id: &OrderId) -> Option<DeliveryStatus> {
        self.inner
            .read()
            .await
            .orders
            .get(id)
            .map(Order::delivery_status)
    }

    /// Cancels an order if it is still in `processing`.
    ///
    /// Only the status field changes. An order in any terminal status is
    /// left untouched and the refusal carries the status that blocked the
    /// cancellation, so a second cancel of an already-canceled order is a
    /// no-op refusal rather than an error.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_order(&self, id: &OrderId) -> Result<CancelOutcome, CatalogError> {
        let mut inner = self.inner.write().await;
        let order = inner
            .orders
            .get_mut(id)
            .ok_or_else(|| CatalogError::OrderNotFound { id: id.clone() })?;

        if !order.status.can_cancel() {
            return Ok(CancelOutcome::Refused {
                status: order.status,
            });
        }

        order.status = OrderStatus::Canceled;
        tracing::info!(order_id = %id, "order canceled");
        Ok(CancelOutcome::Cancelled(order.clone()))
    }

    /// Creates an order from product-name queries.
    ///
    /// Each query resolves independently by case-insensitive substring match
    /// against product names; the first match in catalog order wins, and
    /// queries that match nothing are dropped. Duplicate resolutions are
    /// kept and each counted toward the total. If nothing resolves, no
    /// order is stored.
    #[tracing::instrument(skip(self))]
    pub async fn create_order(&self, product_name_queries: &[String]) -> CreateOutcome {
        let mut inner = self.inner.write().await;

        let mut product_ids = Vec::new();
        let mut total_price = Money::zero();
        for query in product_name_queries {
            if let Some(product) = inner.products.values().find(|p| p.name_matches(query)) {
                product_ids.push(product.id.clone());
                total_price += product.price;
            }
        }

        if product_ids.is_empty() {
            return CreateOutcome::NoMatches;
        }

        let order = Order::new(OrderId::generate(), product_ids, total_price);
        tracing::info!(order_id = %order.id, total = %order.total_price, "order created");
        inner.orders.insert(order.id.clone(), order.clone());
        CreateOutcome::Created(order)
    }

    /// Finds all products whose name contains the query, case-insensitively,
    /// in stable catalog order. An empty result is a valid value, not an
    /// error.
    pub async fn search_products(&self, query: &str) -> Vec<Product> {
        self.inner
            .read()
            .await
            .products
            .values()
            .filter(|p| p.name_matches(query))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_store() -> CatalogStore {
        CatalogStore::new(
            vec![
                Product::new("201", "Men's Parka Jacket", Money::from_units(150), "Men's Winter Clothing"),
                Product::new("208", "Women's Leather Gloves", Money::from_units(40), "Women's Winter Accessories"),
            ],
            vec![Order::seeded(
                "2",
                vec![ProductId::new("201")],
                Money::from_units(150),
                OrderStatus::Processing,
                None,
            )],
        )
    }

    #[tokio::test]
    async fn get_product_exact_match_only() {
        let store = small_store();
        assert!(store.get_product(&ProductId::new("201")).await.is_some());
        // No partial key matching on lookups.
        assert!(store.get_product(&ProductId::new("20")).await.is_none());
    }

    #[tokio::test]
    async fn cancel_missing_order_is_not_found() {
        let store = small_store();
        let err = store.cancel_order(&OrderId::new("999")).await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::OrderNotFound {
                id: OrderId::new("999")
            }
        );
    }

    #[tokio::test]
    async fn cancel_flips_only_the_status_field() {
        let store = small_store();
        let id = OrderId::new("2");
        let before = store.get_order(&id).await.unwrap();

        let outcome = store.cancel_order(&id).await.unwrap();
        let CancelOutcome::Cancelled(after) = outcome else {
            panic!("expected cancellation, got {outcome:?}");
        };
        assert_eq!(after.status, OrderStatus::Canceled);
        assert_eq!(after.product_ids, before.product_ids);
        assert_eq!(after.total_price, before.total_price);
        assert_eq!(after.delivery_date, before.delivery_date);
    }

    #[tokio::test]
    async fn second_cancel_is_a_refusal_and_mutates_nothing() {
        let store = small_store();
        let id = OrderId::new("2");
        store.cancel_order(&id).await.unwrap();

        let outcome = store.cancel_order(&id).await.unwrap();
        assert_eq!(
            outcome,
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
    async fn create_order_counts_duplicates() {
        let store = small_store();
        let queries = vec!["parka".to_string(), "parka".to_string(), "glove".to_string()];
        let CreateOutcome::Created(order) = store.create_order(&queries).await else {
            panic!("expected creation");
        };
        assert_eq!(
            order.product_ids,
            vec![
                ProductId::new("201"),
                ProductId::new("201"),
                ProductId::new("208")
            ]
        );
        assert_eq!(order.total_price, Money::from_units(340));
    }

    #[tokio::test]
    async fn create_order_drops_unmatched_queries_silently() {
        let store = small_store();
        let queries = vec!["no-such-thing".to_string(), "glove".to_string()];
        let CreateOutcome::Created(order) = store.create_order(&queries).await else {
            panic!("expected creation");
        };
        assert_eq!(order.product_ids, vec![ProductId::new("208")]);
        assert_eq!(order.total_price, Money::from_units(40));
    }

    #[tokio::test]
    async fn search_returns_empty_vec_on_zero_matches() {
        let store = small_store();
        assert!(store.search_products("snowmobile").await.is_empty());
    }
}

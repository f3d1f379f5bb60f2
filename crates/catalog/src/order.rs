//! Order record and delivery-status projection.

use chrono::NaiveDate;
use common::{Money, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::status::OrderStatus;

/// A customer order.
///
/// `product_ids` is non-empty and only ever references products that existed
/// in the catalog when the order was created. `total_price` is the sum of the
/// referenced products' prices at creation time and is never recomputed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub product_ids: Vec<ProductId>,
    pub total_price: Money,
    pub status: OrderStatus,
    /// Present only for fulfilled orders with a known date; `null` otherwise.
    pub delivery_date: Option<NaiveDate>,
}

impl Order {
    /// Creates a new order in the `processing` status.
    pub fn new(id: OrderId, product_ids: Vec<ProductId>, total_price: Money) -> Self {
        Self {
            id,
            product_ids,
            total_price,
            status: OrderStatus::Processing,
            delivery_date: None,
        }
    }

    /// Creates a seeded order with an explicit status and delivery date.
    pub fn seeded(
        id: impl Into<OrderId>,
        product_ids: Vec<ProductId>,
        total_price: Money,
        status: OrderStatus,
        delivery_date: Option<NaiveDate>,
    ) -> Self {
        Self {
            id: id.into(),
            product_ids,
            total_price,
            status,
            delivery_date,
        }
    }

    /// Projects the order onto its delivery status.
    pub fn delivery_status(&self) -> DeliveryStatus {
        DeliveryStatus {
            status: self.status,
            delivery_date: self.delivery_date,
        }
    }
}

/// Read-only projection of an order's fulfillment state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeliveryStatus {
    pub status: OrderStatus,
    pub delivery_date: Option<NaiveDate>,
}

//! The dispatcher: envelope in, classified JSON outcome out.

use catalog::{CancelOutcome, CatalogError, CatalogStore, CreateOutcome};
use common::{OrderId, ProductId};
use serde_json::{Value, json};

use crate::action::Action;
use crate::envelope::Envelope;
use crate::error::DispatchError;

/// Routes webhook envelopes to catalog operations.
///
/// Holds an injected [`CatalogStore`] handle; it never touches the catalog
/// maps directly, only through store operations.
#[derive(Clone)]
pub struct Dispatcher {
    store: CatalogStore,
}

impl Dispatcher {
    /// Creates a dispatcher over the given store.
    pub fn new(store: CatalogStore) -> Self {
        Self { store }
    }

    /// Returns the underlying store handle.
    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    /// Validates the envelope, routes the action, and shapes the result.
    ///
    /// `Ok` carries the success payload, including domain refusals ("the
    /// request was processed and the answer is no"). `Err` carries either a
    /// bad-request classification or a not-found.
    #[tracing::instrument(skip(self, body))]
    pub async fn dispatch(&self, body: &Value) -> Result<Value, DispatchError> {
        let envelope = Envelope::parse(body)?;
        let action = Action::from_name(&envelope.action)
            .ok_or_else(|| DispatchError::UnknownAction(envelope.action.clone()))?;
        tracing::debug!(action = %action, "dispatching webhook action");

        match action {
            Action::GetOrderById => self.get_order(&envelope).await,
            Action::GetProductById => self.get_product(&envelope).await,
            Action::GetDeliveryStatusById => self.get_delivery_status(&envelope).await,
            Action::CancelOrderById => self.cancel_order(&envelope).await,
            Action::CreateOrder => self.create_order(&envelope).await,
            Action::SearchProductsByName => self.search_products(&envelope).await,
        }
    }

    async fn get_order(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let id = OrderId::new(envelope.require_str("get_order_by_id", "orderId")?);
        let order = self
            .store
            .get_order(&id)
            .await
            .ok_or_else(|| DispatchError::NotFound(format!("order {id}")))?;
        Ok(to_value(&order))
    }

    async fn get_product(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let id = ProductId::new(envelope.require_str("get_product_by_id", "productId")?);
        let product = self
            .store
            .get_product(&id)
            .await
            .ok_or_else(|| DispatchError::NotFound(format!("product {id}")))?;
        Ok(to_value(&product))
    }

    async fn get_delivery_status(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let id = OrderId::new(envelope.require_str("get_delivery_status_by_id", "orderId")?);
        let status = self
            .store
            .delivery_status(&id)
            .await
            .ok_or_else(|| DispatchError::NotFound(format!("order {id}")))?;
        Ok(to_value(&status))
    }

    async fn cancel_order(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let id = OrderId::new(envelope.require_str("cancel_order_by_id", "orderId")?);
        match self.store.cancel_order(&id).await {
            Ok(CancelOutcome::Cancelled(order)) => Ok(json!({
                "message": "Order canceled",
                "order": to_value(&order),
            })),
            Ok(CancelOutcome::Refused { .. }) => Ok(json!({
                "message": "Cannot cancel shipped, delivered, or already canceled order",
            })),
            Err(CatalogError::OrderNotFound { id }) => {
                Err(DispatchError::NotFound(format!("order {id}")))
            }
        }
    }

    async fn create_order(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let queries = product_name_queries(envelope)?;
        match self.store.create_order(&queries).await {
            CreateOutcome::Created(order) => Ok(json!({
                "message": "Order created",
                "order": to_value(&order),
            })),
            CreateOutcome::NoMatches => Ok(json!({
                "message": "No valid products found, cannot create order.",
            })),
        }
    }

    async fn search_products(&self, envelope: &Envelope) -> Result<Value, DispatchError> {
        let query = envelope.require_str("search_products_by_name", "searchName")?;
        let matches = self.store.search_products(query).await;
        if matches.is_empty() {
            // Zero matches is a domain refusal, communicated as data.
            return Ok(json!({
                "message": "No products found matching the search criteria.",
            }));
        }
        Ok(to_value(&matches))
    }
}

/// Extracts the product-name queries for `create_order`.
///
/// The contract is the list-based `productNames`; a bare `productName`
/// string is accepted as a one-element list for single-product callers.
fn product_name_queries(envelope: &Envelope) -> Result<Vec<String>, DispatchError> {
    if let Some(names) = envelope.schema_data.get("productNames") {
        let names = names.as_array().ok_or(DispatchError::MissingField {
            action: "create_order",
            field: "productNames",
        })?;
        return Ok(names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect());
    }
    if let Some(single) = envelope.schema_data.get("productName").and_then(Value::as_str) {
        return Ok(vec![single.to_string()]);
    }
    Err(DispatchError::MissingField {
        action: "create_order",
        field: "productNames",
    })
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    // Every payload type here serializes infallibly (no maps with
    // non-string keys, no non-finite floats).
    serde_json::to_value(value).unwrap_or(Value::Null)
}

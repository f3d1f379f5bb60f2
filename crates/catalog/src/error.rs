//! Catalog error types.

use common::OrderId;
use thiserror::Error;

/// Errors that can occur during catalog operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// No order exists under the given id.
    #[error("order not found: {id}")]
    OrderNotFound { id: OrderId },
}

//! In-memory catalog of products and orders.
//!
//! This crate is the leaf component of the webhook service. It owns the
//! authoritative product and order maps and enforces all lifecycle rules:
//! - the order status state machine (`processing → shipped → delivered`,
//!   `processing → canceled`),
//! - case-insensitive substring name matching for search and order creation,
//! - unique order-id generation on create.
//!
//! It has no HTTP or dispatch knowledge; callers inject it where needed.

pub mod error;
pub mod order;
pub mod product;
pub mod seed;
pub mod status;
pub mod store;

pub use error::CatalogError;
pub use order::{DeliveryStatus, Order};
pub use product::Product;
pub use status::OrderStatus;
pub use store::{CancelOutcome, CatalogStore, CreateOutcome};

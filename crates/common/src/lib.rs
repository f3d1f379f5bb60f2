//! Shared value objects for the storefront webhook service.
//!
//! These newtypes keep product ids, order ids, and money amounts from being
//! mixed up with plain strings and numbers across crate boundaries.

pub mod types;

pub use types::{Money, OrderId, ProductId};

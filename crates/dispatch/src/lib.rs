//! Action dispatch for the webhook endpoint.
//!
//! The dispatcher accepts a `{action, schemaData}` envelope, routes the
//! action through a fixed enumeration to exactly one catalog operation, and
//! classifies the outcome three ways:
//! - envelope error / unknown action / missing field → bad request,
//! - recognized lookup on an absent id → not found,
//! - domain refusal ("the answer is no") → success carrying a message
//!   payload, never an error.

pub mod action;
pub mod dispatcher;
pub mod envelope;
pub mod error;

pub use action::Action;
pub use dispatcher::Dispatcher;
pub use envelope::Envelope;
pub use error::DispatchError;

//! Dispatch error taxonomy.
//!
//! Only the first three variants are client faults; `NotFound` is a
//! well-formed request whose subject does not exist. Domain refusals are
//! not errors at all and never appear here.

use thiserror::Error;

/// Errors produced while dispatching a webhook envelope.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// The top-level envelope is missing `action` or `schemaData`.
    #[error("Invalid request: action and schemaData are required.")]
    InvalidEnvelope,

    /// The action name is outside the recognized enumeration.
    #[error("Invalid action keyword.")]
    UnknownAction(String),

    /// A recognized action is missing a required `schemaData` field.
    #[error("Invalid request: {field} is required for {action}.")]
    MissingField {
        action: &'static str,
        field: &'static str,
    },

    /// A recognized lookup referenced an id absent from the catalog.
    #[error("Resource not found.")]
    NotFound(String),
}

impl DispatchError {
    /// Returns true if this error classifies as a client bad request
    /// rather than a missing resource.
    pub fn is_bad_request(&self) -> bool {
        !matches!(self, DispatchError::NotFound(_))
    }
}

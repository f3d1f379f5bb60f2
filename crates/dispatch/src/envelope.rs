//! Webhook envelope parsing.

use serde_json::{Map, Value};

use crate::error::DispatchError;

/// The validated top-level request shape `{action, schemaData}`.
///
/// Parsed by hand from a raw JSON value rather than derived, so that a
/// missing field yields the contract's exact bad-request message instead of
/// a framework-shaped deserialization error.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub action: String,
    pub schema_data: Map<String, Value>,
}

impl Envelope {
    /// Validates presence and shape of both envelope fields.
    pub fn parse(body: &Value) -> Result<Self, DispatchError> {
        let object = body.as_object().ok_or(DispatchError::InvalidEnvelope)?;

        let action = object
            .get("action")
            .and_then(Value::as_str)
            .ok_or(DispatchError::InvalidEnvelope)?;
        let schema_data = object
            .get("schemaData")
            .and_then(Value::as_object)
            .ok_or(DispatchError::InvalidEnvelope)?;

        Ok(Self {
            action: action.to_string(),
            schema_data: schema_data.clone(),
        })
    }

    /// Extracts a required string field from `schemaData`.
    pub fn require_str(
        &self,
        action: &'static str,
        field: &'static str,
    ) -> Result<&str, DispatchError> {
        self.schema_data
            .get(field)
            .and_then(Value::as_str)
            .ok_or(DispatchError::MissingField { action, field })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_a_well_formed_envelope() {
        let body = json!({"action": "get_order_by_id", "schemaData": {"orderId": "2"}});
        let envelope = Envelope::parse(&body).unwrap();
        assert_eq!(envelope.action, "get_order_by_id");
        assert_eq!(envelope.require_str("get_order_by_id", "orderId"), Ok("2"));
    }

    #[test]
    fn missing_action_is_an_envelope_error() {
        let body = json!({"schemaData": {"orderId": "2"}});
        assert_eq!(
            Envelope::parse(&body),
            Err(DispatchError::InvalidEnvelope)
        );
    }

    #[test]
    fn missing_schema_data_is_an_envelope_error() {
        let body = json!({"action": "get_order_by_id"});
        assert_eq!(
            Envelope::parse(&body),
            Err(DispatchError::InvalidEnvelope)
        );
    }

    #[test]
    fn non_object_bodies_are_envelope_errors() {
        for body in [json!(null), json!("get_order_by_id"), json!([1, 2])] {
            assert_eq!(
                Envelope::parse(&body),
                Err(DispatchError::InvalidEnvelope)
            );
        }
    }

    #[test]
    fn missing_schema_field_names_the_action_and_field() {
        let body = json!({"action": "cancel_order_by_id", "schemaData": {}});
        let envelope = Envelope::parse(&body).unwrap();
        let err = envelope
            .require_str("cancel_order_by_id", "orderId")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid request: orderId is required for cancel_order_by_id."
        );
    }
}

//! The webhook action endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use serde_json::Value;

use crate::AppState;
use crate::error::ApiError;

/// POST /webhook — dispatch a `{action, schemaData}` envelope.
///
/// The body is taken as raw JSON so that envelope validation produces the
/// contract's own bad-request messages rather than a framework rejection.
#[tracing::instrument(skip(state, body))]
pub async fn handle(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let action = body
        .get("action")
        .and_then(Value::as_str)
        .unwrap_or("invalid")
        .to_string();
    metrics::counter!("webhook_requests_total", "action" => action).increment(1);

    let payload = state.dispatcher.dispatch(&body).await?;
    Ok(Json(payload))
}

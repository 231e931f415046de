use crate::client::{FetchError, OrdersClient};
use reqwest::StatusCode;
use serde_json::Value;

/// Result of one contract check against the orders endpoint.
///
/// A violation is a first-class value rather than a panic or a logged
/// warning: callers decide how to surface it, and nothing in this module
/// absorbs a failed expectation silently.
#[derive(Debug)]
pub enum CheckOutcome {
    Passed { payload: Value },
    Violation(ContractViolation),
}

impl CheckOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, CheckOutcome::Passed { .. })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ContractViolation {
    #[error("Expected status 200 OK, got {status}")]
    UnexpectedStatus { status: StatusCode, payload: Value },
    #[error("Expected the response body to be a JSON array, got {kind}")]
    BodyNotAnArray { kind: &'static str, payload: Value },
}

/// Verifies the order-list contract: `GET /orders` answers 200 with a
/// JSON array body. Transport and decoding failures are not violations
/// and propagate as [`FetchError`].
pub async fn verify_order_list(client: &OrdersClient) -> Result<CheckOutcome, FetchError> {
    let response = client.get_orders().await?;
    Ok(evaluate(response.status, response.payload))
}

/// Classifies an already-decoded response. Status is checked before body
/// shape, so a non-200 answer with an object body reports the status.
pub fn evaluate(status: StatusCode, payload: Value) -> CheckOutcome {
    if status != StatusCode::OK {
        return CheckOutcome::Violation(ContractViolation::UnexpectedStatus { status, payload });
    }

    if !payload.is_array() {
        return CheckOutcome::Violation(ContractViolation::BodyNotAnArray {
            kind: json_kind(&payload),
            payload,
        });
    }

    CheckOutcome::Passed { payload }
}

/// Indented dump of the payload for manual inspection. Parsing the
/// rendered text back yields the same value.
pub fn render_payload(payload: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(payload)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

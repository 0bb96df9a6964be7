//! Execution data exchanged with the host

use serde::Serialize;
use serde_json::{Value, json};

/// A single item produced by a node execution.
///
/// The host passes items between workflow steps as `{json: ...}` wrappers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExecutionData {
    pub json: Value,
}

/// What a node execution hands back to the host: one item list per output.
pub type ExecutionResult = Vec<Vec<ExecutionData>>;

impl ExecutionData {
    /// Wrap a JSON value as an execution item
    pub fn from_json(json: Value) -> Self {
        Self { json }
    }

    /// A `{success: "ok"}` item
    pub fn success() -> Self {
        Self {
            json: json!({"success": "ok"}),
        }
    }

    /// An error-shaped item.
    ///
    /// This is a successful execution carrying an error payload, not a
    /// fault; the workflow continues.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            json: json!({"error": message.into()}),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_serialize_as_json_wrappers() {
        let item = ExecutionData::error("List operation is not implemented yet");
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"json": {"error": "List operation is not implemented yet"}})
        );

        let item = ExecutionData::success();
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({"json": {"success": "ok"}})
        );
    }
}

//! Wire types for the GraphQL-over-HTTP contract.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of every request: `{query, variables}` POSTed as JSON.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

impl GraphQlRequest {
    pub fn new(query: impl Into<String>, variables: Value) -> Self {
        Self {
            query: query.into(),
            variables,
        }
    }
}

/// Body of every response: `{data?, errors?}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

/// One entry of the top-level error list. Servers may attach locations,
/// paths, and extensions; we keep them for diagnostics without
/// interpreting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQlError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
            extensions: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_tolerates_missing_fields() {
        let resp: GraphQlResponse = serde_json::from_str("{}").expect("parse");
        assert!(resp.data.is_none());
        assert!(resp.errors.is_none());
    }

    #[test]
    fn partial_failure_carries_both_data_and_errors() {
        let resp: GraphQlResponse = serde_json::from_value(serde_json::json!({
            "data": {"getProjects": []},
            "errors": [{"message": "field 'x' failed", "path": ["getProjects", 0]}],
        }))
        .expect("parse");
        assert!(resp.data.is_some());
        assert_eq!(resp.errors.map(|e| e.len()), Some(1));
    }
}

//! Stable cache keys for operations.

use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Deterministic key derived from an operation name and its variables.
/// Two invocations with the same name and logically equal variables always
/// collide to the same identity, regardless of object key order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OperationIdentity(String);

impl OperationIdentity {
    pub fn new(operation: &str, variables: &Value) -> Self {
        let mut key = String::with_capacity(operation.len() + 16);
        key.push_str(operation);
        key.push('(');
        write_canonical(variables, &mut key);
        key.push(')');
        Self(key)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// JSON rendering with object keys sorted, so the identity is independent
/// of map iteration order.
fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Object(map) => {
            let sorted: BTreeMap<&String, &Value> = map.iter().collect();
            out.push('{');
            for (i, (k, v)) in sorted.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(k.clone()).to_string());
                out.push(':');
                write_canonical(v, out);
            }
            out.push('}');
        }
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        other => out.push_str(&other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identical_inputs_collide() {
        let a = OperationIdentity::new("getProjects", &json!({}));
        let b = OperationIdentity::new("getProjects", &json!({}));
        assert_eq!(a, b);
    }

    #[test]
    fn key_order_does_not_matter() {
        let a = OperationIdentity::new("getProject", &json!({"id": "1", "full": true}));
        let b = OperationIdentity::new("getProject", &json!({"full": true, "id": "1"}));
        assert_eq!(a, b);
    }

    #[test]
    fn different_variables_do_not_collide() {
        let a = OperationIdentity::new("getProject", &json!({"id": "1"}));
        let b = OperationIdentity::new("getProject", &json!({"id": "2"}));
        assert_ne!(a, b);
    }

    #[test]
    fn different_operations_do_not_collide() {
        let a = OperationIdentity::new("getProjects", &json!({}));
        let b = OperationIdentity::new("getSkills", &json!({}));
        assert_ne!(a, b);
    }

    #[test]
    fn nested_objects_are_canonicalized() {
        let a = OperationIdentity::new("op", &json!({"input": {"b": 1, "a": [1, 2]}}));
        let b = OperationIdentity::new("op", &json!({"input": {"a": [1, 2], "b": 1}}));
        assert_eq!(a, b);
        assert_eq!(a.as_str(), r#"op({"input":{"a":[1,2],"b":1}})"#);
    }
}

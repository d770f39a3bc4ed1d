//! Decoding of untyped (JSON) query arguments.
//!
//! The typed API cannot be called with the wrong shape; these helpers are
//! for callers that drive the graph from dynamic input and need the same
//! checks at runtime.

use serde_json::Value;

use super::error::{GraphError, GraphResult};

/// Require a string key.
pub fn key(value: &Value) -> GraphResult<&str> {
    value
        .as_str()
        .ok_or_else(|| GraphError::InvalidArgument(format!("expected a string key, got {value}")))
}

/// Coerce a node identifier to its canonical string form.
///
/// Strings are taken as-is, numbers and booleans use their JSON text.
pub fn node_key(value: &Value) -> GraphResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(GraphError::InvalidArgument(format!(
            "cannot use {other} as a node key"
        ))),
    }
}

/// Decode the optional "count self-loops" flag of the degree queries.
///
/// Absent means `true`.
pub fn self_loop_flag(value: Option<&Value>) -> GraphResult<bool> {
    match value {
        None => Ok(true),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(other) => Err(GraphError::InvalidArgument(format!(
            "the self-loop flag must be a boolean, got {other}"
        ))),
    }
}

use serde::Serialize;

/// Render an algebra value as compact JSON.
///
/// Export is one way: variable identity cannot be rebuilt from JSON, so
/// nothing here deserializes. Errors follow `serde_json`.
pub fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

/// Render an algebra value as pretty-printed JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

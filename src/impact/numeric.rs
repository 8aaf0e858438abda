use serde_json::Value;

/// True only for genuine numeric values usable in arithmetic.
///
/// Booleans are never numeric, even though some producers encode flags as
/// 0/1. `serde_json` keeps them in their own variant, so matching on
/// `Value::Number` alone is enough to exclude them.
pub fn is_numeric(value: &Value) -> bool {
    numeric_value(value).is_some()
}

/// Extract a finite `f64` from a JSON value, or `None` for "no data".
pub fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::Null | Value::Bool(_) | Value::String(_) | Value::Array(_) | Value::Object(_) => {
            None
        }
    }
}

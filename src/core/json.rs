//! JSON helpers for embedding values in log messages
//!
//! Both helpers return text and never fail: a serialization error becomes
//! a `<JSON Error: ...>` placeholder inside the returned string.

use serde::Serialize;

/// Serialize `value` as compact JSON.
///
/// ```
/// use leveled_log::to_json;
/// use serde_json::json;
///
/// assert_eq!(to_json(&json!({"a": 1})), r#"{"a":1}"#);
/// ```
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!("<JSON Error: {}>", e))
}

/// Serialize `value` as JSON indented with two spaces.
pub fn to_json_indent<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| format!("<JSON Error: {}>", e))
}

//! Reusable field filters
//!
//! Filters normalize submitted field values before validation runs.

use serde_json::Value;

/// Filter: trim whitespace from string values
pub fn trim() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Value::String(s.trim().to_string())
        } else {
            value
        }
    }
}

/// Filter: convert string values to lowercase
pub fn lowercase() -> impl Fn(&str, Value) -> Value + Send + Sync + Clone {
    |_: &str, value: Value| {
        if let Some(s) = value.as_str() {
            Value::String(s.to_lowercase())
        } else {
            value
        }
    }
}

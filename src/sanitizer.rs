//! Removal of financially sensitive fields from Manager API payloads.
//!
//! # Traversal
//! ```text
//! record
//!     → drop balance / status / controlAccount
//!     → employees: [record, record, ...]   (same procedure per element)
//! ```
//!
//! Only the `employees` field is followed. Sensitive keys nested under any
//! other field name are left as they are.

use serde_json::{Map, Value};

/// Keys that must never leave the gateway.
pub const SENSITIVE_FIELDS: [&str; 3] = ["balance", "status", "controlAccount"];

/// The only field the sanitizer descends into.
pub const COLLECTION_FIELD: &str = "employees";

/// Sanitize a value, returning the cleaned value.
pub fn sanitize(mut value: Value) -> Value {
    sanitize_in_place(&mut value);
    value
}

/// Sanitize a value in place. Non-object values are untouched.
pub fn sanitize_in_place(value: &mut Value) {
    if let Value::Object(record) = value {
        strip_record(record);
    }
}

fn strip_record(record: &mut Map<String, Value>) {
    for field in SENSITIVE_FIELDS {
        record.remove(field);
    }

    // A non-array `employees` field is not a collection; leave it alone.
    if let Some(Value::Array(items)) = record.get_mut(COLLECTION_FIELD) {
        items.iter_mut().for_each(sanitize_in_place);
    }
}

/// Whether any sensitive key is present on a sanitized path of `value`.
pub fn contains_sensitive(value: &Value) -> bool {
    match value {
        Value::Object(record) => {
            SENSITIVE_FIELDS.iter().any(|f| record.contains_key(*f))
                || matches!(
                    record.get(COLLECTION_FIELD),
                    Some(Value::Array(items)) if items.iter().any(contains_sensitive)
                )
        }
        _ => false,
    }
}

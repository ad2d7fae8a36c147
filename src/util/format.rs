//! Rendering helpers for open-ended profile and details maps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{FieldMap, FieldValue};

/// Greeting shown in the dashboard header.
pub fn welcome_text(user: Option<&FieldMap>) -> String {
    match user.and_then(FieldMap::display_name) {
        Some(name) => format!("Welcome back, {name}"),
        None => "Welcome back".to_owned(),
    }
}

/// `first_name` → `first name`.
pub fn humanize_key(key: &str) -> String {
    key.replace('_', " ")
}

fn display_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// Scalars render as plain text; null and nested values as compact JSON.
pub fn display_value(value: &FieldValue) -> String {
    match value {
        FieldValue::Text(s) => s.clone(),
        FieldValue::Number(n) => display_number(n),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Null | FieldValue::List(_) | FieldValue::Map(_) => {
            serde_json::to_string(value).unwrap_or_default()
        }
    }
}

/// `(label, value)` rows in the map's own order.
pub fn field_rows(map: &FieldMap) -> Vec<(String, String)> {
    map.iter().map(|(k, v)| (humanize_key(k), display_value(v))).collect()
}

//! Per-type rendering rules.
//!
//! One rule per supported node type. Every prop a rule reads goes
//! through the responsive resolver with a rule-supplied default, so a
//! document written before a property existed still renders correctly.

mod button;
mod container;
mod image;
mod text;

pub use button::ButtonRule;
pub use container::ContainerRule;
pub use image::ImageRule;
pub use text::TextRule;

use serde_json::Value;

/// Resolved prop as a number, tolerating the numeric strings that form
/// inputs produce.
pub(crate) fn number_or(value: Option<&Value>, default: f64) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(default),
        Some(Value::String(s)) => s.parse().unwrap_or(default),
        _ => default,
    }
}

/// Resolved prop as a string.
pub(crate) fn string_or<'a>(value: Option<&'a Value>, default: &'a str) -> &'a str {
    value.and_then(Value::as_str).unwrap_or(default)
}

/// Resolved prop as CSS text, accepting strings and bare numbers
/// (`fontWeight: 500`).
pub(crate) fn scalar_or(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => default.to_string(),
    }
}

//! Spacing and dimension formatting.

use serde_json::Value;

/// Format a pixel count without a trailing `.0`.
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

/// Convert a spacing prop to a CSS inset shorthand in top, right,
/// bottom, left order.
///
/// Four-element arrays become `"Tpx Rpx Bpx Lpx"` (non-numeric entries
/// count as zero), bare numbers become `"Npx"`, anything else is a zero
/// inset.
pub fn inset_shorthand(value: Option<&Value>) -> String {
    match value {
        Some(Value::Array(items)) if items.len() == 4 => {
            let sides: Vec<String> = items
                .iter()
                .map(|item| px(item.as_f64().unwrap_or(0.0)))
                .collect();
            sides.join(" ")
        }
        Some(Value::Number(n)) => px(n.as_f64().unwrap_or(0.0)),
        _ => "0px".to_string(),
    }
}

/// Format a box-dimension prop.
///
/// The `"auto"` sentinel and percentage widths (`"100%"`) pass through
/// unchanged; numbers — and the numeric strings that form inputs
/// produce — become px. Absent props take `default` as-is.
pub fn css_dimension(value: Option<&Value>, default: &str) -> String {
    match value {
        Some(Value::Number(n)) => px(n.as_f64().unwrap_or(0.0)),
        Some(Value::String(s)) if s == "auto" || s.ends_with('%') => s.clone(),
        Some(Value::String(s)) => match s.parse::<f64>() {
            Ok(n) => px(n),
            Err(_) => s.clone(),
        },
        _ => default.to_string(),
    }
}

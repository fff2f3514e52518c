//! Emptiness and sample-eligibility rules for individual cells.

use crate::data::Value;

const NOT_AVAILABLE: &str = "N/A";
const ERROR_PREFIX: &str = "#ERROR";

/// True when a cell counts as empty: null, `""`, numeric zero, or text that
/// is blank or `N/A` once trimmed (case-insensitive).
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Integer(i) => *i == 0,
        Value::Float(f) => *f == 0.0,
        Value::Text(text) => {
            let trimmed = text.trim();
            trimmed.is_empty() || trimmed.to_uppercase() == NOT_AVAILABLE
        }
        Value::Boolean(_) | Value::Date(_) | Value::DateTime(_) | Value::Error(_) => false,
    }
}

/// Error markers are never sampled but still count as non-empty.
pub fn is_error_marker(value: &Value) -> bool {
    match value {
        Value::Error(_) => true,
        Value::Text(text) => text.trim().to_uppercase().starts_with(ERROR_PREFIX),
        _ => false,
    }
}

pub fn is_sample_eligible(value: &Value) -> bool {
    !is_empty(value) && !is_error_marker(value)
}

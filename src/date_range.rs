//! Earliest and latest value of an optional date column.
//!
//! Bounds are taken over canonical text, not parsed dates. ISO 8601 text
//! (what [`Value::canonical_text`] emits for dates and datetimes) sorts
//! chronologically; free-form text in the column sorts as text.

use serde::Serialize;

use crate::{data::Value, dataset::Table, error::ProfileError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
}

pub fn analyze_date_range(
    table: &Table,
    date_column: Option<&str>,
) -> Result<DateRange, ProfileError> {
    let Some(column) = date_column.filter(|name| !name.is_empty()) else {
        return Ok(DateRange::default());
    };
    if !table.has_column(column) {
        return Ok(DateRange::default());
    }

    let mut range = DateRange::default();
    for (row_idx, value) in table.column_values(column)?.enumerate() {
        if value.is_null() {
            continue;
        }
        let text = render(value, column, row_idx)?;
        if range.min_date.as_ref().is_none_or(|current| text < *current) {
            range.min_date = Some(text.clone());
        }
        if range.max_date.as_ref().is_none_or(|current| text > *current) {
            range.max_date = Some(text);
        }
    }
    Ok(range)
}

fn render(value: &Value, column: &str, row_idx: usize) -> Result<String, ProfileError> {
    value
        .canonical_text()
        .map_err(|reason| ProfileError::MalformedCellText {
            column: column.to_string(),
            row: row_idx + 1,
            reason: reason.to_string(),
        })
}

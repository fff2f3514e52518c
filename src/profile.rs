use itertools::Itertools;
use log::debug;
use serde::Serialize;

use crate::{
    classifier::{is_empty, is_sample_eligible},
    data::Value,
    dataset::Table,
    error::ProfileError,
};

pub const SAMPLE_SEPARATOR: &str = ", ";

/// Completeness statistics for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnStatRecord {
    pub column_name: String,
    pub empty_count: usize,
    pub non_empty_count: usize,
    pub total_count: usize,
    /// Share of non-empty cells in `0.0..=1.0`; zero for a table without rows.
    pub completeness_ratio: f64,
    pub sample_values: String,
}

pub fn profile_column(
    table: &Table,
    column_name: &str,
    max_samples: usize,
) -> Result<ColumnStatRecord, ProfileError> {
    if max_samples == 0 {
        return Err(ProfileError::InvalidSampleLimit);
    }
    let values = table.column_values(column_name)?;

    let total_count = table.row_count();
    let mut empty_count = 0usize;
    let mut samples: Vec<(usize, &Value)> = Vec::with_capacity(max_samples);
    for (row_idx, value) in values.enumerate() {
        if is_empty(value) {
            empty_count += 1;
        } else if samples.len() < max_samples && is_sample_eligible(value) {
            samples.push((row_idx, value));
        }
    }
    let non_empty_count = total_count - empty_count;
    let completeness_ratio = if total_count > 0 {
        non_empty_count as f64 / total_count as f64
    } else {
        0.0
    };

    let rendered = samples
        .into_iter()
        .map(|(row_idx, value)| {
            value
                .canonical_text()
                .map_err(|reason| ProfileError::MalformedCellText {
                    column: column_name.to_string(),
                    row: row_idx + 1,
                    reason: reason.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(
        "Column '{column_name}': {non_empty_count}/{total_count} non-empty, {} sample(s)",
        rendered.len()
    );

    Ok(ColumnStatRecord {
        column_name: column_name.to_string(),
        empty_count,
        non_empty_count,
        total_count,
        completeness_ratio,
        sample_values: rendered.iter().join(SAMPLE_SEPARATOR),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> Table {
        Table::new(
            vec!["id".to_string(), "name".to_string()],
            vec![
                vec![Value::Integer(1), Value::from("Alice")],
                vec![Value::Integer(2), Value::from("")],
                vec![Value::Integer(3), Value::from("N/A")],
            ],
        )
        .unwrap()
    }

    #[test]
    fn profiles_names_with_blank_and_not_available_cells() {
        let record = profile_column(&people(), "name", 5).unwrap();
        assert_eq!(record.empty_count, 2);
        assert_eq!(record.non_empty_count, 1);
        assert_eq!(record.total_count, 3);
        assert!((record.completeness_ratio - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(record.sample_values, "Alice");
    }

    #[test]
    fn samples_keep_row_order_and_respect_limit() {
        let record = profile_column(&people(), "id", 2).unwrap();
        assert_eq!(record.sample_values, "1, 2");
        assert_eq!(record.non_empty_count, 3);
    }

    #[test]
    fn samples_are_not_deduplicated() {
        let table = Table::new(
            vec!["city".to_string()],
            vec![vec![Value::from("Oslo")], vec![Value::from("Oslo")]],
        )
        .unwrap();
        let record = profile_column(&table, "city", 5).unwrap();
        assert_eq!(record.sample_values, "Oslo, Oslo");
    }

    #[test]
    fn error_text_counts_as_filled_but_is_not_sampled() {
        let table = Table::new(
            vec!["reading".to_string()],
            vec![
                vec![Value::from("#error: bad read")],
                vec![Value::Float(1.5)],
            ],
        )
        .unwrap();
        let record = profile_column(&table, "reading", 5).unwrap();
        assert_eq!(record.empty_count, 0);
        assert_eq!(record.non_empty_count, 2);
        assert_eq!(record.sample_values, "1.5");
    }

    #[test]
    fn empty_table_yields_zeroed_record() {
        let table = Table::new(vec!["name".to_string()], Vec::new()).unwrap();
        let record = profile_column(&table, "name", 5).unwrap();
        assert_eq!(record.total_count, 0);
        assert_eq!(record.empty_count, 0);
        assert_eq!(record.non_empty_count, 0);
        assert_eq!(record.completeness_ratio, 0.0);
        assert_eq!(record.sample_values, "");
    }

    #[test]
    fn unknown_column_is_rejected() {
        let err = profile_column(&people(), "email", 5).unwrap_err();
        assert!(matches!(err, ProfileError::InvalidColumnReference { .. }));
    }

    #[test]
    fn non_finite_sample_is_reported_with_position() {
        let table = Table::new(
            vec!["ratio".to_string()],
            vec![vec![Value::Float(0.5)], vec![Value::Float(f64::NAN)]],
        )
        .unwrap();
        let err = profile_column(&table, "ratio", 5).unwrap_err();
        assert!(matches!(
            err,
            ProfileError::MalformedCellText { row: 2, .. }
        ));
    }

    #[test]
    fn zero_sample_limit_is_rejected() {
        assert_eq!(
            profile_column(&people(), "name", 0).unwrap_err(),
            ProfileError::InvalidSampleLimit
        );
    }
}

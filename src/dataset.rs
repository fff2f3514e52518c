//! Immutable in-memory table handed to the profiling engine.
//!
//! Column names are validated once at construction: they must be unique and
//! every row must carry exactly one value per declared column. After that,
//! [`Table::column_index`] is the only lookup callers need, and positional
//! access through a resolved index can never miss.

use std::collections::HashMap;

use crate::{data::Value, error::ProfileError};

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Value>>) -> Result<Self, ProfileError> {
        let mut index = HashMap::with_capacity(columns.len());
        for (position, name) in columns.iter().enumerate() {
            if index.insert(name.clone(), position).is_some() {
                return Err(ProfileError::DuplicateColumn {
                    column: name.clone(),
                });
            }
        }
        for (row_idx, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(ProfileError::RowWidthMismatch {
                    row: row_idx + 1,
                    expected: columns.len(),
                    found: row.len(),
                });
            }
        }
        Ok(Self {
            columns,
            index,
            rows,
        })
    }

    /// Builds a table from rows keyed by column name. Every row must name
    /// exactly the declared columns.
    pub fn from_records(
        columns: Vec<String>,
        records: Vec<HashMap<String, Value>>,
    ) -> Result<Self, ProfileError> {
        let mut rows = Vec::with_capacity(records.len());
        for (row_idx, mut record) in records.into_iter().enumerate() {
            let found = record.len();
            let mut row = Vec::with_capacity(columns.len());
            for name in &columns {
                match record.remove(name) {
                    Some(value) => row.push(value),
                    None => {
                        return Err(ProfileError::RowWidthMismatch {
                            row: row_idx + 1,
                            expected: columns.len(),
                            found,
                        });
                    }
                }
            }
            if !record.is_empty() {
                return Err(ProfileError::RowWidthMismatch {
                    row: row_idx + 1,
                    expected: columns.len(),
                    found,
                });
            }
            rows.push(row);
        }
        Self::new(columns, rows)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Result<usize, ProfileError> {
        self.index
            .get(name)
            .copied()
            .ok_or_else(|| ProfileError::InvalidColumnReference {
                column: name.to_string(),
            })
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Values of one column in row order.
    pub fn column_values<'a>(
        &'a self,
        name: &str,
    ) -> Result<impl Iterator<Item = &'a Value> + use<'a>, ProfileError> {
        let position = self.column_index(name)?;
        Ok(self.rows.iter().map(move |row| &row[position]))
    }
}

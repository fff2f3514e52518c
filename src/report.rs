//! Report assembly: one row per profiled column followed by the two
//! date-range sentinel rows, indexed from 1 in final order.

use chrono::NaiveDateTime;
use log::{debug, info, warn};

use crate::{
    clock::TimestampProvider,
    data::DATETIME_FORMAT,
    dataset::Table,
    date_range::analyze_date_range,
    error::ProfileError,
    profile::{ColumnStatRecord, profile_column},
};

pub const DEFAULT_MAX_SAMPLES: usize = 5;
pub const DATA_RANGE_MIN: &str = "DATA_RANGE_MIN";
pub const DATA_RANGE_MAX: &str = "DATA_RANGE_MAX";

pub const REPORT_HEADERS: [&str; 9] = [
    "Index",
    "ColumnName",
    "EmptyBlankZeroNullCount",
    "NonEmptyCount",
    "TotalCount",
    "CompletenessPercentage",
    "SampleValues",
    "TableName",
    "AnalysisDate",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Columns to profile; `None` profiles every column of the table.
    pub columns: Option<Vec<String>>,
    pub date_column: Option<String>,
    pub max_samples: usize,
    pub table_name: String,
}

impl ReportOptions {
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            columns: None,
            date_column: None,
            max_samples: DEFAULT_MAX_SAMPLES,
            table_name: table_name.into(),
        }
    }
}

/// One line of the report. Sentinel rows leave every numeric field `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub index: usize,
    pub column_name: String,
    pub empty_count: Option<usize>,
    pub non_empty_count: Option<usize>,
    pub total_count: Option<usize>,
    pub completeness_ratio: Option<f64>,
    pub sample_values: Option<String>,
    pub table_name: String,
    pub analysis_date: NaiveDateTime,
}

impl ReportRow {
    fn from_record(record: ColumnStatRecord, table_name: &str, at: NaiveDateTime) -> Self {
        Self {
            index: 0,
            column_name: record.column_name,
            empty_count: Some(record.empty_count),
            non_empty_count: Some(record.non_empty_count),
            total_count: Some(record.total_count),
            completeness_ratio: Some(record.completeness_ratio),
            sample_values: Some(record.sample_values),
            table_name: table_name.to_string(),
            analysis_date: at,
        }
    }

    fn sentinel(label: &str, bound: Option<String>, table_name: &str, at: NaiveDateTime) -> Self {
        Self {
            index: 0,
            column_name: label.to_string(),
            empty_count: None,
            non_empty_count: None,
            total_count: None,
            completeness_ratio: None,
            sample_values: bound,
            table_name: table_name.to_string(),
            analysis_date: at,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        self.total_count.is_none()
    }

    /// Completeness scaled to percent for display.
    pub fn completeness_percentage(&self) -> Option<f64> {
        self.completeness_ratio.map(|ratio| ratio * 100.0)
    }

    /// Text cells in [`REPORT_HEADERS`] order. Missing values render empty.
    pub fn cells(&self) -> Vec<String> {
        vec![
            self.index.to_string(),
            self.column_name.clone(),
            optional_count(self.empty_count),
            optional_count(self.non_empty_count),
            optional_count(self.total_count),
            self.completeness_percentage()
                .map(|percent| format!("{percent:.2}"))
                .unwrap_or_default(),
            self.sample_values.clone().unwrap_or_default(),
            self.table_name.clone(),
            self.analysis_date.format(DATETIME_FORMAT).to_string(),
        ]
    }
}

fn optional_count(value: Option<usize>) -> String {
    value.map(|count| count.to_string()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    pub rows: Vec<ReportRow>,
}

impl ReportTable {
    pub fn headers() -> Vec<String> {
        REPORT_HEADERS.iter().map(|h| h.to_string()).collect()
    }

    pub fn cell_rows(&self) -> Vec<Vec<String>> {
        self.rows.iter().map(ReportRow::cells).collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub fn assemble(
    table: &Table,
    options: &ReportOptions,
    clock: &dyn TimestampProvider,
) -> Result<ReportTable, ProfileError> {
    if options.max_samples == 0 {
        return Err(ProfileError::InvalidSampleLimit);
    }
    let columns = resolve_columns(table, options.columns.as_deref())?;
    debug!("Profiling {} column(s): {:?}", columns.len(), columns);

    let mut rows = Vec::with_capacity(columns.len() + 2);
    for column in &columns {
        let record = profile_column(table, column, options.max_samples)?;
        rows.push(ReportRow::from_record(
            record,
            &options.table_name,
            clock.now(),
        ));
    }

    let date_column = options.date_column.as_deref().filter(|name| !name.is_empty());
    if let Some(name) = date_column
        && !table.has_column(name)
    {
        warn!("Date column '{name}' not present; date range left empty");
    }
    let range = analyze_date_range(table, date_column)?;
    rows.push(ReportRow::sentinel(
        DATA_RANGE_MIN,
        range.min_date,
        &options.table_name,
        clock.now(),
    ));
    rows.push(ReportRow::sentinel(
        DATA_RANGE_MAX,
        range.max_date,
        &options.table_name,
        clock.now(),
    ));

    for (position, row) in rows.iter_mut().enumerate() {
        row.index = position + 1;
    }

    info!(
        "Assembled quality report for '{}' with {} column(s) over {} row(s)",
        options.table_name,
        columns.len(),
        table.row_count()
    );
    Ok(ReportTable { rows })
}

/// Requested columns in table declaration order. A name requested twice is
/// profiled twice, so the report keeps one row per requested name.
fn resolve_columns<'a>(
    table: &'a Table,
    requested: Option<&[String]>,
) -> Result<Vec<&'a str>, ProfileError> {
    let Some(requested) = requested.filter(|names| !names.is_empty()) else {
        return Ok(table.columns().iter().map(String::as_str).collect());
    };
    let mut positions = requested
        .iter()
        .map(|name| table.column_index(name))
        .collect::<Result<Vec<_>, _>>()?;
    positions.sort();
    Ok(positions
        .into_iter()
        .map(|idx| table.columns()[idx].as_str())
        .collect())
}

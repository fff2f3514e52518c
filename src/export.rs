//! CSV and JSON serialization of a finished report.

use std::{io::Write, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    data::DATETIME_FORMAT,
    io_utils,
    report::{ReportRow, ReportTable},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct ExportRow<'a> {
    index: usize,
    column_name: &'a str,
    empty_blank_zero_null_count: Option<usize>,
    non_empty_count: Option<usize>,
    total_count: Option<usize>,
    completeness_percentage: Option<f64>,
    sample_values: Option<&'a str>,
    table_name: &'a str,
    analysis_date: String,
}

impl<'a> From<&'a ReportRow> for ExportRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        Self {
            index: row.index,
            column_name: &row.column_name,
            empty_blank_zero_null_count: row.empty_count,
            non_empty_count: row.non_empty_count,
            total_count: row.total_count,
            completeness_percentage: row
                .completeness_percentage()
                .map(|percent| (percent * 100.0).round() / 100.0),
            sample_values: row.sample_values.as_deref(),
            table_name: &row.table_name,
            analysis_date: row.analysis_date.format(DATETIME_FORMAT).to_string(),
        }
    }
}

pub fn write_csv(report: &ReportTable, path: Option<&Path>, delimiter: u8) -> Result<()> {
    let mut writer = io_utils::open_csv_writer(path, delimiter)?;
    writer
        .write_record(ReportTable::headers())
        .context("Writing report header")?;
    for row in &report.rows {
        writer
            .write_record(row.cells())
            .with_context(|| format!("Writing report row {}", row.index))?;
    }
    writer.flush().context("Flushing report output")?;
    Ok(())
}

pub fn to_json(report: &ReportTable) -> Result<String> {
    let rows = report.rows.iter().map(ExportRow::from).collect::<Vec<_>>();
    serde_json::to_string_pretty(&rows).context("Serializing report to JSON")
}

pub fn write_json(report: &ReportTable, path: Option<&Path>) -> Result<()> {
    let mut writer = io_utils::open_output(path)?;
    writeln!(writer, "{}", to_json(report)?).context("Writing JSON report")?;
    writer.flush().context("Flushing report output")?;
    Ok(())
}

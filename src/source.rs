//! Loads a delimited file into an in-memory [`Table`].

use std::path::Path;

use anyhow::{Context, Result};
use encoding_rs::{Encoding, UTF_8};
use log::debug;

use crate::{data::Value, dataset::Table, io_utils};

#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub encoding: &'static Encoding,
    /// Stop after this many data rows.
    pub limit: Option<usize>,
    /// Detect numbers, booleans, dates and error literals; otherwise every
    /// non-empty field is text.
    pub infer_types: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: io_utils::DEFAULT_CSV_DELIMITER,
            encoding: UTF_8,
            limit: None,
            infer_types: true,
        }
    }
}

pub fn load_table(path: &Path, options: &LoadOptions) -> Result<Table> {
    let mut reader = io_utils::open_csv_reader_from_path(path, options.delimiter)?;
    let headers = io_utils::reader_headers(&mut reader, options.encoding)
        .with_context(|| format!("Reading headers from {path:?}"))?;

    let mut rows: Vec<Vec<Value>> = Vec::new();
    for (row_idx, record) in reader.byte_records().enumerate() {
        if options.limit.is_some_and(|limit| row_idx >= limit) {
            debug!("Row limit {row_idx} reached for {path:?}");
            break;
        }
        let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
        let decoded = io_utils::decode_record(&record, options.encoding)
            .with_context(|| format!("Decoding row {}", row_idx + 2))?;
        rows.push(
            decoded
                .iter()
                .map(|raw| parse_cell(raw, options.infer_types))
                .collect(),
        );
    }

    debug!(
        "Loaded {} row(s) x {} column(s) from {path:?}",
        rows.len(),
        headers.len()
    );
    Table::new(headers, rows).with_context(|| format!("Building table from {path:?}"))
}

fn parse_cell(raw: &str, infer_types: bool) -> Value {
    if infer_types {
        Value::infer(raw)
    } else if raw.is_empty() {
        Value::Null
    } else {
        Value::Text(raw.to_string())
    }
}

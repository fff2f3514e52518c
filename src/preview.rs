use anyhow::{Context, Result};
use log::info;

use crate::{
    classifier::is_empty,
    cli::PreviewArgs,
    data::Value,
    dataset::Table,
    io_utils, render,
    source::{self, LoadOptions},
};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let options = LoadOptions {
        delimiter: io_utils::resolve_input_delimiter(&args.input, args.delimiter),
        encoding: io_utils::resolve_encoding(args.input_encoding.as_deref())?,
        limit: Some(args.rows),
        infer_types: true,
    };
    let table = source::load_table(&args.input, &options)
        .with_context(|| format!("Loading {:?}", args.input))?;
    let (headers, rows) = preview_rows(&table);
    render::print_table(&headers, &rows, &[]);
    info!("Displayed {} row(s) from {:?}", rows.len(), args.input);
    Ok(())
}

/// Headers annotated with the type of each column's first non-empty cell,
/// and every cell in canonical text.
pub fn preview_rows(table: &Table) -> (Vec<String>, Vec<Vec<String>>) {
    let headers = table
        .columns()
        .iter()
        .enumerate()
        .map(|(position, name)| {
            let detected = table
                .rows()
                .iter()
                .map(|row| &row[position])
                .find(|value| !is_empty(value))
                .map_or("empty", Value::type_name);
            format!("{name} [{detected}]")
        })
        .collect();
    let rows = table
        .rows()
        .iter()
        .map(|row| row.iter().map(Value::to_string).collect())
        .collect();
    (headers, rows)
}

//! The `profile` command: load, assemble, and emit a quality report.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::info;

use crate::{
    cli::{OutputFormat, ProfileArgs},
    clock::SystemClock,
    config::ProfileConfig,
    export, io_utils,
    render::{self, Align},
    report::{self, DEFAULT_MAX_SAMPLES, ReportOptions, ReportTable},
    source::{self, LoadOptions},
};

const REPORT_ALIGNMENT: [Align; 6] = [
    Align::Right,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
];

pub fn execute(args: &ProfileArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            ProfileConfig::load(path).with_context(|| format!("Loading config from {path:?}"))?
        }
        None => ProfileConfig::default(),
    };
    let (load_options, report_options) = resolve_settings(args, &config)?;

    info!(
        "Profiling '{}' with delimiter '{}'",
        args.input.display(),
        io_utils::printable_delimiter(load_options.delimiter)
    );
    let table = source::load_table(&args.input, &load_options)
        .with_context(|| format!("Loading {:?}", args.input))?;
    let report = report::assemble(&table, &report_options, &SystemClock)
        .with_context(|| format!("Profiling {:?}", args.input))?;

    let format = resolve_format(args.format, args.output.as_deref());
    emit(&report, format, args.output.as_deref())?;
    info!(
        "Profiled {} column(s) across {} row(s) of '{}'",
        report.len().saturating_sub(2),
        table.row_count(),
        report_options.table_name
    );
    Ok(())
}

/// Merges flags over the config file over built-in defaults.
pub(crate) fn resolve_settings(
    args: &ProfileArgs,
    config: &ProfileConfig,
) -> Result<(LoadOptions, ReportOptions)> {
    let delimiter =
        io_utils::resolve_input_delimiter(&args.input, args.delimiter.or(config.delimiter_byte()));
    let encoding = io_utils::resolve_encoding(
        args.input_encoding
            .as_deref()
            .or(config.input_encoding.as_deref()),
    )?;
    let load_options = LoadOptions {
        delimiter,
        encoding,
        limit: args.limit.or(config.limit),
        infer_types: !args.no_infer && config.infer_types.unwrap_or(true),
    };

    let columns = if args.columns.is_empty() {
        config.columns.clone()
    } else {
        args.columns.clone()
    };
    let columns = columns
        .into_iter()
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>();
    let report_options = ReportOptions {
        columns: (!columns.is_empty()).then_some(columns),
        date_column: args.date_column.clone().or_else(|| config.date_column.clone()),
        max_samples: args
            .max_samples
            .map(|value| value as usize)
            .or(config.max_samples)
            .unwrap_or(DEFAULT_MAX_SAMPLES),
        table_name: args
            .table_name
            .clone()
            .or_else(|| config.table_name.clone())
            .unwrap_or_else(|| default_table_name(&args.input)),
    };
    Ok((load_options, report_options))
}

pub(crate) fn default_table_name(input: &Path) -> String {
    if io_utils::is_dash(input) {
        return "stdin".to_string();
    }
    input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

pub(crate) fn resolve_format(requested: Option<OutputFormat>, output: Option<&Path>) -> OutputFormat {
    if let Some(format) = requested {
        return format;
    }
    match output.and_then(|p| p.extension()).and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("csv") || ext.eq_ignore_ascii_case("tsv") => {
            OutputFormat::Csv
        }
        Some(ext) if ext.eq_ignore_ascii_case("json") => OutputFormat::Json,
        _ => OutputFormat::Table,
    }
}

fn emit(report: &ReportTable, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    match format {
        OutputFormat::Table => {
            let headers = ReportTable::headers();
            let rows = report.cell_rows();
            match output.filter(|p| !io_utils::is_dash(p)) {
                Some(path) => {
                    let rendered = render::render_table(&headers, &rows, &REPORT_ALIGNMENT);
                    fs::write(path, rendered)
                        .with_context(|| format!("Writing report to {path:?}"))?;
                }
                None => render::print_table(&headers, &rows, &REPORT_ALIGNMENT),
            }
        }
        OutputFormat::Csv => {
            export::write_csv(report, output, io_utils::resolve_output_delimiter(output))?
        }
        OutputFormat::Json => export::write_json(report, output)?,
    }
    if let Some(path) = output.filter(|p| !io_utils::is_dash(p)) {
        info!("Report written to {path:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args(input: &str) -> ProfileArgs {
        ProfileArgs {
            input: PathBuf::from(input),
            config: None,
            columns: Vec::new(),
            date_column: None,
            max_samples: None,
            table_name: None,
            limit: None,
            delimiter: None,
            input_encoding: None,
            no_infer: false,
            format: None,
            output: None,
        }
    }

    #[test]
    fn defaults_apply_without_flags_or_config() {
        let (load, report) = resolve_settings(&args("data/weekly.tsv"), &ProfileConfig::default())
            .unwrap();
        assert_eq!(load.delimiter, b'\t');
        assert_eq!(load.limit, None);
        assert!(load.infer_types);
        assert_eq!(report.max_samples, DEFAULT_MAX_SAMPLES);
        assert_eq!(report.table_name, "weekly");
        assert_eq!(report.columns, None);
        assert_eq!(report.date_column, None);
    }

    #[test]
    fn flags_override_config_values() {
        let config = ProfileConfig {
            table_name: Some("from_config".to_string()),
            date_column: Some("week_date".to_string()),
            max_samples: Some(2),
            columns: vec!["id".to_string()],
            limit: Some(50),
            delimiter: Some(";".to_string()),
            input_encoding: None,
            infer_types: Some(true),
        };
        let mut cli = args("data.csv");
        cli.table_name = Some("from_flag".to_string());
        cli.max_samples = Some(7);
        cli.no_infer = true;
        let (load, report) = resolve_settings(&cli, &config).unwrap();
        assert_eq!(load.delimiter, b';');
        assert_eq!(load.limit, Some(50));
        assert!(!load.infer_types);
        assert_eq!(report.table_name, "from_flag");
        assert_eq!(report.max_samples, 7);
        assert_eq!(report.columns, Some(vec!["id".to_string()]));
        assert_eq!(report.date_column.as_deref(), Some("week_date"));
    }

    #[test]
    fn stdin_input_gets_stdin_table_name() {
        assert_eq!(default_table_name(Path::new("-")), "stdin");
    }

    #[test]
    fn format_follows_output_extension_unless_requested() {
        assert_eq!(resolve_format(None, None), OutputFormat::Table);
        assert_eq!(
            resolve_format(None, Some(Path::new("out.JSON"))),
            OutputFormat::Json
        );
        assert_eq!(
            resolve_format(None, Some(Path::new("out.csv"))),
            OutputFormat::Csv
        );
        assert_eq!(
            resolve_format(Some(OutputFormat::Table), Some(Path::new("out.csv"))),
            OutputFormat::Table
        );
    }
}

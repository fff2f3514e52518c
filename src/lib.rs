pub mod classifier;
pub mod cli;
pub mod clock;
pub mod config;
pub mod data;
pub mod dataset;
pub mod date_range;
pub mod error;
pub mod export;
pub mod io_utils;
pub mod preview;
pub mod profile;
pub mod profile_cmd;
pub mod render;
pub mod report;
pub mod source;

use std::{env, sync::OnceLock};

use anyhow::{Result, bail};
use clap::Parser;
use log::{LevelFilter, info};

use crate::{
    cli::{Cli, Commands},
    config::ProfileConfig,
};

pub use crate::{
    clock::{FixedClock, SystemClock, TimestampProvider},
    data::Value,
    dataset::Table,
    date_range::{DateRange, analyze_date_range},
    error::ProfileError,
    profile::{ColumnStatRecord, profile_column},
    report::{ReportOptions, ReportRow, ReportTable, assemble},
};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("csv_quality", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    match cli.command {
        Commands::Profile(args) => profile_cmd::execute(&args),
        Commands::Preview(args) => preview::execute(&args),
        Commands::InitConfig(args) => handle_init_config(&args),
    }
}

fn handle_init_config(args: &cli::InitConfigArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{:?} already exists; pass --force to overwrite it",
            args.output
        );
    }
    ProfileConfig::template().save(&args.output)?;
    info!("Wrote profile configuration to {:?}", args.output);
    Ok(())
}

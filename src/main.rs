use clap::Parser;
use lemons_import::{import_archive, write_outputs, ImportConfig};
use log::{debug, error};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "lemons-import",
    about = "Convert archived Lemons Cookbook recipe pages into Markdown"
)]
struct Cli {
    /// Directory holding the archived listing and recipe pages
    #[arg(short, long)]
    archives: Option<PathBuf>,
    /// Directory the Markdown documents are written to
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Write a JSON summary of the run to this file
    #[arg(long)]
    report: Option<PathBuf>,
    /// Parse everything but write nothing
    #[arg(long)]
    dry_run: bool,
}

fn run(cli: Cli) -> Result<(), lemons_import::ImportError> {
    let mut config = ImportConfig::load()?;
    if let Some(archives) = cli.archives {
        config.archives_dir = archives;
    }
    if let Some(output) = cli.output {
        config.output_dir = output;
    }
    if cli.report.is_some() {
        config.report = cli.report;
    }

    let report = import_archive(&config)?;
    for failure in report.failures() {
        debug!("Skipped {}: {}", failure.identifier, failure.reason);
    }
    report.log_summary();

    if !cli.dry_run {
        write_outputs(&config, &report)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

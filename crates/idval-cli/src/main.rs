//! # idval CLI Entry Point
//!
//! Parses arguments, initializes tracing, and maps the run status to the
//! process exit code. All report output is produced by the pipeline in
//! `idval_cli::run`.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use idval_cli::run::{run, RunStatus};

/// Validate identity YAML files against their schemas.
///
/// Checks every `application_*` / `human_*` YAML file in the target
/// directory against the corresponding JSON Schema and reports per-file
/// pass/fail with error detail.
#[derive(Parser, Debug)]
#[command(name = "idval", version, about)]
struct Cli {
    /// Directory containing identity YAML files.
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,

    /// Enable verbose output.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    // Accepted for interface stability; verbosity semantics are not
    // defined yet.
    let _ = cli.verbose;

    match run(&cli.dir) {
        RunStatus::Success => ExitCode::SUCCESS,
        RunStatus::Failure => ExitCode::FAILURE,
    }
}

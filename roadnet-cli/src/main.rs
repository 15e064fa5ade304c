//! CLI entry point for roadnet.
//!
//! Parses command-line arguments with clap, analyses the requested map,
//! writes the report to a file or stdout, and maps errors to exit codes.
//! Logging is initialised first so every later step can emit structured
//! diagnostics via `tracing`.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use roadnet_cli::{
    cli::{Cli, CliError, run_cli, write_summary},
    logging::{self, LoggingError},
};
use tracing::{error, field};

/// Parse CLI arguments, execute the command and write the report.
fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    write_summary(&summary).context("failed to write report")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err
            .downcast_ref::<CliError>()
            .map(|cli_error| field::display(cli_error.code()));
        error!(error = %format_args!("{err:#}"), code, "command execution failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}

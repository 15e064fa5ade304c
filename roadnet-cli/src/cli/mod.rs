//! Command-line interface orchestration for roadnet.
//!
//! The CLI offers an `analyze` command that reads a tab-separated map file,
//! runs the map analysis and renders the report to a file or stdout.

mod commands;
mod report;

pub use commands::{
    AnalyzeCommand, Cli, CliError, Command, DedupArg, ExecutionSummary, RatioPolicyArg, run_cli,
    write_summary,
};
pub use report::render_report;

#[cfg(test)]
mod test_helpers;

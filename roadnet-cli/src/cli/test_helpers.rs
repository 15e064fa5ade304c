//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary map files and assert error handling
//! behaviour. These helpers keep the test cases concise and consistent.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::commands::run_analyze;
use super::{AnalyzeCommand, Cli, CliError, Command, DedupArg, RatioPolicyArg, run_cli};

pub(super) const TRIANGLE: &str = "A\tC\nA\tB\t5\t1\nB\tC\t3\t2\nA\tC\t10\t3\n";

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_map_file(dir: &TempDir, name: &str, contents: &str) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn analyze(input: PathBuf) -> AnalyzeCommand {
    AnalyzeCommand {
        input,
        output: None,
        weight_dedup: DedupArg::EndpointPair,
        degenerate_ratio: RatioPolicyArg::Sentinel,
        name: None,
    }
}

pub(super) fn cli(command: AnalyzeCommand) -> Cli {
    Cli {
        command: Command::Analyze(command),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

pub(super) fn run_analyze_expecting_error(command: AnalyzeCommand, panic_msg: &str) -> CliError {
    match run_analyze(command) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}

//! Command implementations and argument parsing for the roadnet CLI.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use roadnet_core::{
    AnalysisError, AnalysisReport, AnalyzerBuilder, DegenerateRatioPolicy, MapAnalyzer,
    RoadSource, WeightDedup,
};
use roadnet_providers_text::{MapFileError, TextMap};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::report::render_report;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "roadnet",
    about = "Find fastest routes and barely connected maps of a road network."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Analyse a tab-separated map file.
    Analyze(AnalyzeCommand),
}

/// Options accepted by the `analyze` command.
#[derive(Debug, Args, Clone)]
pub struct AnalyzeCommand {
    /// Map file: a `<start>\t<end>` line followed by `<A>\t<B>\t<weight>\t<id>` lines.
    pub input: PathBuf,

    /// Report destination, created or truncated. Defaults to stdout.
    pub output: Option<PathBuf>,

    /// How the total road length counts parallel roads.
    #[arg(long, value_enum, default_value_t = DedupArg::EndpointPair)]
    pub weight_dedup: DedupArg,

    /// What to do when a ratio divides by zero.
    #[arg(long, value_enum, default_value_t = RatioPolicyArg::Sentinel)]
    pub degenerate_ratio: RatioPolicyArg,

    /// Override name for the data source (defaults to the file stem).
    #[arg(long)]
    pub name: Option<String>,
}

/// Command-line spelling of [`WeightDedup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DedupArg {
    /// One road per pair of endpoints.
    EndpointPair,
    /// One road per id.
    EdgeId,
}

impl From<DedupArg> for WeightDedup {
    fn from(value: DedupArg) -> Self {
        match value {
            DedupArg::EndpointPair => Self::EndpointPair,
            DedupArg::EdgeId => Self::EdgeId,
        }
    }
}

/// Command-line spelling of [`DegenerateRatioPolicy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RatioPolicyArg {
    /// Print `NaN` or `Infinity`.
    Sentinel,
    /// Fail the command.
    Reject,
}

impl From<RatioPolicyArg> for DegenerateRatioPolicy {
    fn from(value: RatioPolicyArg) -> Self {
        match value {
            RatioPolicyArg::Sentinel => Self::Sentinel,
            RatioPolicyArg::Reject => Self::Reject,
        }
    }
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The map file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The report could not be written.
    #[error("failed to write report to {destination}: {source}")]
    Output {
        /// Output path, or `stdout`.
        destination: String,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The map file was rejected.
    #[error(transparent)]
    MapFile(#[from] MapFileError),
    /// The analysis failed.
    #[error(transparent)]
    Analysis(#[from] AnalysisError),
}

impl CliError {
    /// Returns a stable, machine-readable code for the failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_INPUT_IO",
            Self::Output { .. } => "CLI_OUTPUT_IO",
            Self::MapFile(err) => err.code().as_str(),
            Self::Analysis(err) => err.code().as_str(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name reported by the road source.
    pub data_source: String,
    /// Number of road lines that were skipped.
    pub skipped_lines: usize,
    /// Where the report should go; stdout when `None`.
    pub output: Option<PathBuf>,
    /// The analysis itself.
    pub report: AnalysisReport,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the map cannot be read or the analysis fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use roadnet_cli::cli::{AnalyzeCommand, Cli, Command, DedupArg, RatioPolicyArg, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "A\tC\nA\tB\t5\t1\nB\tC\t3\t2\nA\tC\t10\t3\n")?;
/// let cli = Cli {
///     command: Command::Analyze(AnalyzeCommand {
///         input: file.path().to_path_buf(),
///         output: None,
///         weight_dedup: DedupArg::EndpointPair,
///         degenerate_ratio: RatioPolicyArg::Sentinel,
///         name: None,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.report.original_route().total_distance(), 8);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    match cli.command {
        Command::Analyze(command) => {
            Span::current().record("command", field::display("analyze"));
            run_analyze(command)
        }
    }
}

#[instrument(
    name = "cli.analyze",
    err,
    skip(command),
    fields(
        input = field::Empty,
        output = field::Empty,
        weight_dedup = field::Empty,
        degenerate_ratio = field::Empty,
    ),
)]
pub(super) fn run_analyze(command: AnalyzeCommand) -> Result<ExecutionSummary, CliError> {
    let AnalyzeCommand {
        input,
        output,
        weight_dedup,
        degenerate_ratio,
        name,
    } = command;
    let span = Span::current();
    span.record("input", field::display(input.display()));
    span.record(
        "output",
        field::display(output.as_deref().map_or("<stdout>".into(), Path::to_string_lossy)),
    );
    span.record("weight_dedup", field::debug(weight_dedup));
    span.record("degenerate_ratio", field::debug(degenerate_ratio));

    let analyzer: MapAnalyzer = AnalyzerBuilder::new()
        .with_weight_dedup(weight_dedup.into())
        .with_degenerate_ratio_policy(degenerate_ratio.into())
        .build();

    let chosen_name = derive_data_source_name(&input, name.as_deref());
    let reader = open_map_reader(&input)?;
    let map = TextMap::try_from_reader(chosen_name, reader)?;
    let report = analyzer.run(&map)?;

    info!(
        data_source = map.name(),
        roads = map.roads().len(),
        skipped = map.skipped().len(),
        "command completed"
    );
    Ok(ExecutionSummary {
        data_source: map.name().to_owned(),
        skipped_lines: map.skipped().len(),
        output,
        report,
    })
}

#[instrument(name = "cli.open_map_reader", err, fields(path = field::Empty))]
pub(super) fn open_map_reader(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_data_source_name(path: &Path, override_name: Option<&str>) -> String {
    if let Some(name) = override_name {
        return name.to_owned();
    }

    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "road_map".to_owned())
}

/// Writes the report in `summary` to its output file, or to `stdout` when no
/// output was requested.
///
/// # Errors
/// Returns [`CliError::Output`] when the destination cannot be created or
/// written.
#[instrument(name = "cli.write_summary", err, skip(summary), fields(destination = field::Empty))]
pub fn write_summary(summary: &ExecutionSummary) -> Result<(), CliError> {
    match &summary.output {
        Some(path) => {
            let destination = path.display().to_string();
            Span::current().record("destination", field::display(&destination));
            let wrap = |source| CliError::Output {
                destination: format!("`{destination}`"),
                source,
            };
            let file = File::create(path).map_err(wrap)?;
            write_to(&summary.report, BufWriter::new(file)).map_err(wrap)
        }
        None => {
            Span::current().record("destination", field::display("stdout"));
            let stdout = io::stdout();
            write_to(&summary.report, BufWriter::new(stdout.lock())).map_err(|source| {
                CliError::Output {
                    destination: "stdout".to_owned(),
                    source,
                }
            })
        }
    }
}

fn write_to(report: &AnalysisReport, mut writer: impl Write) -> io::Result<()> {
    render_report(report, &mut writer)?;
    writer.flush()
}

//! Argument parsing and command execution for the mkdigraph CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use mkdigraph_core::{DigraphConfig, DigraphConfigBuilder, DigraphError, OutputFormat, encode};
use mkdigraph_providers_words::{WordsError, load_label_pool};
use thiserror::Error;
use tracing::{Span, field, info, instrument, warn};

const DEFAULT_VERTICES: i64 = 25;
const DEFAULT_EDGES: i64 = 5;
const DEFAULT_PROBABILITY: f64 = 0.5;

/// Command-line options parsed by [`clap`].
///
/// Without `--words`, vertices are labelled by their index. Otherwise labels
/// come from the words file; once it runs out, labels are reused with the
/// vertex index appended.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mkdigraph",
    version,
    about = "Generate random directed graphs as a stream.",
    long_about = "Generate random directed graphs as a stream. Vertices are produced one at \
                  a time, so graphs larger than memory can be written out."
)]
pub struct Cli {
    /// Number of vertices.
    #[arg(
        short = 'n',
        long = "vertices",
        default_value_t = DEFAULT_VERTICES,
        allow_negative_numbers = true,
    )]
    pub vertices: i64,

    /// Maximum number of outgoing edges per vertex.
    #[arg(
        short = 'e',
        long = "edges",
        default_value_t = DEFAULT_EDGES,
        allow_negative_numbers = true,
    )]
    pub edges: i64,

    /// Probability of creating an edge, between 0 and 1.
    #[arg(
        short = 'p',
        long = "prob",
        default_value_t = DEFAULT_PROBABILITY,
        allow_negative_numbers = true,
    )]
    pub probability: f64,

    /// Allow loops.
    #[arg(long)]
    pub loops: bool,

    /// Allow more than one edge with the same tail and head.
    #[arg(long = "multiedges")]
    pub multi_edges: bool,

    /// Choose vertex labels from a words file.
    #[arg(short = 'w', long)]
    pub words: Option<PathBuf>,

    /// Output encoding.
    #[arg(short = 'f', long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Emit DOT output; shorthand for `--format dot`.
    #[arg(long, conflicts_with = "format")]
    pub dot: bool,

    /// Output file. Defaults to standard output.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Seed for the random source. A random seed is drawn and logged when
    /// omitted.
    #[arg(short = 's', long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Output encoding selected by `--format` or `--dot`.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.dot {
            OutputFormat::Dot
        } else {
            self.format.into()
        }
    }
}

/// Output encodings accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `tail [head]` lines.
    Text,
    /// Graphviz DOT.
    Dot,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Dot => Self::Dot,
        }
    }
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The generator parameters were out of range.
    #[error(transparent)]
    Config(#[from] DigraphError),
    /// The words file could not be loaded.
    #[error(transparent)]
    Words(#[from] WordsError),
    /// The output file could not be created.
    #[error("failed to create `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing the generated graph failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.code().as_str(),
            Self::Words(err) => err.code().as_str(),
            Self::Io { .. } => "CLI_OUTPUT_CREATE_FAILED",
            Self::Output { .. } => "CLI_OUTPUT_WRITE_FAILED",
        }
    }
}

/// Summarises a completed generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Number of vertex records written.
    pub vertices: usize,
    /// Number of edges written.
    pub edges: usize,
    /// Seed of the random source, for replaying the run.
    pub seed: u64,
    /// Encoding used for the output.
    pub format: OutputFormat,
}

/// A validated run, ready to be streamed to a writer.
#[derive(Debug, Clone)]
struct Plan {
    config: DigraphConfig,
    seed: u64,
    format: OutputFormat,
}

/// Executes `cli`, writing the graph to `--output` or standard output.
///
/// Every parameter is validated, and the words file read, before the output
/// is opened, so configuration errors never leave partial output behind.
///
/// # Errors
/// Returns [`CliError`] when validation, loading the words file, or writing
/// the output fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use clap::Parser;
/// # use mkdigraph_cli::cli::{Cli, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let output = dir.path().join("graph.txt");
/// let cli = Cli::try_parse_from([
///     "mkdigraph", "-n", "4", "--seed", "1", "-o", output.to_str().ok_or("utf-8 path")?,
/// ])?;
/// let summary = run_cli(&cli)?;
/// assert_eq!(summary.vertices, 4);
/// assert!(std::fs::read_to_string(&output)?.lines().count() >= 4);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(output = field::Empty),
)]
pub fn run_cli(cli: &Cli) -> Result<GenerationSummary, CliError> {
    let plan = prepare(cli)?;
    let span = Span::current();
    match &cli.output {
        Some(path) => {
            span.record("output", field::display(path.display()));
            let file = create_output(path)?;
            emit(plan, BufWriter::new(file))
        }
        None => {
            span.record("output", field::display("<stdout>"));
            let stdout = io::stdout();
            emit(plan, BufWriter::new(stdout.lock()))
        }
    }
}

/// Executes `cli`, writing the graph to `writer` instead of `--output`.
///
/// # Errors
/// Returns [`CliError`] when validation, loading the words file, or writing
/// to `writer` fails.
pub fn run_with_writer<W: Write>(cli: &Cli, writer: W) -> Result<GenerationSummary, CliError> {
    let plan = prepare(cli)?;
    emit(plan, writer)
}

#[instrument(
    name = "cli.prepare",
    err,
    skip(cli),
    fields(vertices = cli.vertices, edges = cli.edges, probability = cli.probability),
)]
fn prepare(cli: &Cli) -> Result<Plan, CliError> {
    let mut config = DigraphConfigBuilder::new()
        .with_vertex_count(cli.vertices)
        .with_trial_count(cli.edges)
        .with_probability(cli.probability)
        .with_loops(cli.loops)
        .with_multi_edges(cli.multi_edges)
        .build()?;
    if let Some(path) = &cli.words {
        config = config.with_labels(load_label_pool(path)?);
    }
    Ok(Plan {
        config,
        seed: cli.seed.unwrap_or_else(draw_seed),
        format: cli.output_format(),
    })
}

/// Draws a fresh seed and reports it at a level the default filter shows, so
/// the run can be replayed with `--seed`.
fn draw_seed() -> u64 {
    let seed = rand::random();
    warn!(seed, "no --seed given, drew a random seed");
    seed
}

#[instrument(name = "cli.create_output", err, fields(path = field::Empty))]
pub(super) fn create_output(path: &Path) -> Result<File, CliError> {
    Span::current().record("path", field::display(path.display()));
    File::create(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn emit<W: Write>(plan: Plan, mut writer: W) -> Result<GenerationSummary, CliError> {
    let Plan {
        config,
        seed,
        format,
    } = plan;
    info!(seed, format = %format, "generating digraph");
    let stats = encode(format, &mut writer, config.generate_seeded(seed))
        .and_then(|stats| writer.flush().map(|()| stats))
        .map_err(|source| CliError::Output { source })?;
    info!(
        vertices = stats.vertices,
        edges = stats.edges,
        seed,
        "generation completed"
    );
    Ok(GenerationSummary {
        vertices: stats.vertices,
        edges: stats.edges,
        seed,
        format,
    })
}

//! Command implementations and argument parsing for the arbor CLI.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use arbor_core::{
    Edge, GenerateError, Graph, GraphError, MstError, RandomGraphConfig, TripleError,
    generate_random_graph, prim, read_triples_path, write_triples,
};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "arbor",
    about = "Compute minimum spanning forests of weighted graphs."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Compute the minimum spanning forest of a triple-format graph file.
    Mst(MstArgs),
    /// Print the adjacency lists of a triple-format graph file.
    Show(ShowArgs),
    /// Generate a random graph in triple format.
    Generate(GenerateArgs),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstArgs {
    /// Path to the graph file.
    pub path: PathBuf,

    /// How to print the forest.
    #[arg(long, value_enum, default_value_t = ForestFormat::Text)]
    pub format: ForestFormat,
}

/// Output formats for the `mst` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ForestFormat {
    /// A summary followed by one `u - v (w)` line per edge.
    #[default]
    Text,
    /// The forest as a graph in triple format.
    Triples,
}

/// Options accepted by the `show` command.
#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Path to the graph file.
    pub path: PathBuf,
}

/// Options accepted by the `generate` command.
#[derive(Debug, Args, Clone)]
pub struct GenerateArgs {
    /// Number of vertices.
    #[arg(long, default_value_t = arbor_core::DEFAULT_VERTEX_COUNT)]
    pub vertices: usize,

    /// Fraction of all possible edges to create, in `[0, 1]`.
    #[arg(long, default_value_t = 0.1)]
    pub density: f64,

    /// Smallest edge weight.
    #[arg(long = "min-weight", default_value_t = 0.0, allow_negative_numbers = true)]
    pub min_weight: f64,

    /// Largest edge weight.
    #[arg(long = "max-weight", default_value_t = 1.0, allow_negative_numbers = true)]
    pub max_weight: f64,

    /// Seed for reproducible output; omitted means a fresh random seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the graph to this file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Writing a file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Writing command output failed.
    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
    /// Reading or writing triples failed.
    #[error(transparent)]
    Triples(#[from] TripleError),
    /// The generator configuration was rejected.
    #[error(transparent)]
    Generate(#[from] GenerateError),
    /// The spanning forest computation failed.
    #[error(transparent)]
    Mst(#[from] MstError),
    /// Rebuilding the forest as a graph failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

impl CliError {
    /// Returns the stable code of the underlying error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "CLI_IO",
            Self::Output(_) => "CLI_OUTPUT",
            Self::Triples(err) => err.code().as_str(),
            Self::Generate(err) => err.code().as_str(),
            Self::Mst(err) => err.code().as_str(),
            Self::Graph(err) => err.code().as_str(),
        }
    }
}

/// An owned summary of a spanning forest, detached from its input graph.
#[derive(Debug, Clone)]
pub struct ForestSummary {
    /// Number of vertices spanned.
    pub vertex_count: usize,
    /// Number of trees, one per connected component.
    pub tree_count: usize,
    /// Sum of the forest edge weights.
    pub total_weight: f64,
    /// Forest edges in the order their far endpoint was reached.
    pub edges: Vec<Edge>,
    /// Requested rendering.
    pub format: ForestFormat,
}

/// What a command produced, ready to be rendered.
#[derive(Debug, Clone)]
pub enum CommandOutput {
    /// Result of `mst`.
    Forest(ForestSummary),
    /// A graph to print as adjacency lists (`show`).
    Adjacency(Graph),
    /// A graph to print in triple format (`generate` without `--output`).
    Triples(Graph),
    /// A generated graph already written to disk.
    Written {
        /// Destination file.
        path: PathBuf,
        /// Number of edges written.
        edge_count: usize,
    },
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading input, computing, or writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{Cli, Command, CommandOutput, ForestFormat, MstArgs, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "3\n0 1 1.0\n1 2 2.0\n0 2 5.0\n")?;
/// let cli = Cli {
///     command: Command::Mst(MstArgs {
///         path: file.path().to_path_buf(),
///         format: ForestFormat::Text,
///     }),
/// };
/// let CommandOutput::Forest(summary) = run_cli(cli)? else {
///     unreachable!("mst produces a forest");
/// };
/// assert_eq!(summary.total_weight, 3.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<CommandOutput, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Mst(args) => {
            span.record("command", "mst");
            run_mst(args).map(CommandOutput::Forest)
        }
        Command::Show(args) => {
            span.record("command", "show");
            run_show(&args).map(CommandOutput::Adjacency)
        }
        Command::Generate(args) => {
            span.record("command", "generate");
            run_generate(args)
        }
    }
}

#[instrument(
    name = "cli.mst",
    err,
    skip(args),
    fields(path = %args.path.display(), trees = field::Empty),
)]
pub(super) fn run_mst(args: MstArgs) -> Result<ForestSummary, CliError> {
    let graph = read_triples_path(&args.path)?;
    let forest = prim(&graph)?;

    let summary = ForestSummary {
        vertex_count: forest.vertex_count(),
        tree_count: forest.component_count(),
        total_weight: forest.total_weight(),
        edges: forest.edges().copied().collect(),
        format: args.format,
    };
    Span::current().record("trees", summary.tree_count);
    info!(
        edges = summary.edges.len(),
        total_weight = summary.total_weight,
        "forest computed"
    );
    Ok(summary)
}

#[instrument(name = "cli.show", err, skip(args), fields(path = %args.path.display()))]
pub(super) fn run_show(args: &ShowArgs) -> Result<Graph, CliError> {
    Ok(read_triples_path(&args.path)?)
}

#[instrument(
    name = "cli.generate",
    err,
    skip(args),
    fields(vertices = args.vertices, density = args.density, seed = field::Empty),
)]
pub(super) fn run_generate(args: GenerateArgs) -> Result<CommandOutput, CliError> {
    let config = RandomGraphConfig::new(args.vertices)
        .with_density(args.density)
        .with_weight_range(args.min_weight, args.max_weight);
    let mut rng = match args.seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };
    let graph = generate_random_graph(&config, &mut rng)?;

    let Some(path) = args.output else {
        return Ok(CommandOutput::Triples(graph));
    };
    write_graph_file(&graph, &path)?;
    info!(path = %path.display(), edges = graph.edge_count(), "graph written");
    Ok(CommandOutput::Written {
        edge_count: graph.edge_count(),
        path,
    })
}

fn write_graph_file(graph: &Graph, path: &Path) -> Result<(), CliError> {
    let io_error = |source| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    write_triples(graph, BufWriter::new(file)).map_err(|err| match err {
        TripleError::Io(source) => io_error(source),
        other => CliError::Triples(other),
    })
}

/// Renders `output` to `writer`.
///
/// # Errors
/// Returns [`CliError::Output`] if writing fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use arbor_cli::cli::{CommandOutput, ForestFormat, ForestSummary, render_output};
/// # use arbor_core::Edge;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let output = CommandOutput::Forest(ForestSummary {
///     vertex_count: 2,
///     tree_count: 1,
///     total_weight: 1.5,
///     edges: vec![Edge::new(0, 1, 1.5)],
///     format: ForestFormat::Text,
/// });
/// let mut buffer = Vec::new();
/// render_output(&output, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer)?,
///     "vertices: 2\ntrees: 1\nedges: 1\ntotal weight: 1.5\n0 - 1 (1.5)\n",
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_output(output: &CommandOutput, mut writer: impl Write) -> Result<(), CliError> {
    match output {
        CommandOutput::Forest(summary) => render_forest(summary, &mut writer),
        CommandOutput::Adjacency(graph) => write!(writer, "{graph}").map_err(CliError::Output),
        CommandOutput::Triples(graph) => write_triples(graph, &mut writer).map_err(output_error),
        CommandOutput::Written { path, edge_count } => writeln!(
            writer,
            "wrote {edge_count} edges to {}",
            path.display()
        )
        .map_err(CliError::Output),
    }
}

fn render_forest(summary: &ForestSummary, writer: &mut impl Write) -> Result<(), CliError> {
    match summary.format {
        ForestFormat::Text => write_forest_text(summary, writer).map_err(CliError::Output),
        ForestFormat::Triples => {
            let forest = Graph::from_edges(
                summary.vertex_count,
                summary
                    .edges
                    .iter()
                    .map(|edge| (edge.source(), edge.target(), edge.weight())),
            )?;
            write_triples(&forest, writer).map_err(output_error)
        }
    }
}

fn write_forest_text(summary: &ForestSummary, writer: &mut impl Write) -> io::Result<()> {
    writeln!(writer, "vertices: {}", summary.vertex_count)?;
    writeln!(writer, "trees: {}", summary.tree_count)?;
    writeln!(writer, "edges: {}", summary.edges.len())?;
    writeln!(writer, "total weight: {}", summary.total_weight)?;
    for edge in &summary.edges {
        writeln!(writer, "{edge:#}")?;
    }
    Ok(())
}

fn output_error(err: TripleError) -> CliError {
    match err {
        TripleError::Io(source) => CliError::Output(source),
        other => CliError::Triples(other),
    }
}

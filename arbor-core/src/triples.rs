//! Whitespace-separated triple format for graphs.
//!
//! The first token is the vertex count `V`. Every following group of three
//! tokens is an edge `u v weight`, with integral endpoints and a floating
//! point weight. Line breaks carry no meaning, so a whole graph may sit on
//! one line.
//!
//! ```text
//! 4
//! 0 1 1.0
//! 1 2 2.0
//! 0 2 3.0
//! 2 3 4.0
//! ```

use std::{
    fmt,
    fs::File,
    io::{self, BufRead, BufReader, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    Graph, GraphError,
    error::{ErrorKind, define_error_codes},
};

/// Largest vertex count [`read_triples`] accepts.
pub const MAX_VERTEX_COUNT: usize = 1 << 24;

/// Errors raised while reading or writing the triple format.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum TripleError {
    /// The input file does not exist.
    #[error("graph file `{}` does not exist", path.display())]
    NotFound {
        /// Path that was opened.
        path: PathBuf,
    },
    /// Reading or writing the stream failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    /// The stream held no tokens at all.
    #[error("input does not start with a vertex count")]
    MissingVertexCount,
    /// The leading vertex count was negative.
    #[error("vertex count must not be negative, found {count}")]
    NegativeVertexCount {
        /// The parsed count.
        count: i64,
    },
    /// The leading vertex count exceeded [`MAX_VERTEX_COUNT`].
    #[error("vertex count {count} exceeds the limit of {limit}")]
    VertexCountTooLarge {
        /// The parsed count.
        count: usize,
        /// The largest accepted count.
        limit: usize,
    },
    /// A token could not be parsed as the expected number.
    #[error("token {position} `{token}` is not a valid {expected}")]
    Parse {
        /// One-based index of the token in the stream.
        position: usize,
        /// The offending token.
        token: String,
        /// What the token should have been.
        expected: Expected,
    },
    /// The stream ended part-way through an edge.
    #[error("edge {edge} is incomplete: expected 3 tokens, found {found}")]
    IncompleteTriple {
        /// One-based index of the truncated edge.
        edge: usize,
        /// Number of tokens present in the final group.
        found: usize,
    },
    /// The graph rejected an edge, or could not be created (`edge == 0`).
    #[error("edge {edge} was rejected: {source}")]
    Graph {
        /// One-based index of the rejected edge, zero for the vertex count.
        edge: usize,
        /// Underlying graph error.
        #[source]
        source: GraphError,
    },
}

define_error_codes! {
    /// Stable codes describing [`TripleError`] variants.
    enum TripleErrorCode for TripleError {
        /// The input file does not exist.
        NotFound => NotFound { .. } => "TRIPLES_NOT_FOUND",
        /// Reading or writing the stream failed.
        Io => Io { .. } => "TRIPLES_IO",
        /// The stream held no tokens at all.
        MissingVertexCount => MissingVertexCount => "TRIPLES_MISSING_VERTEX_COUNT",
        /// The leading vertex count was negative.
        NegativeVertexCount => NegativeVertexCount { .. } => "TRIPLES_NEGATIVE_VERTEX_COUNT",
        /// The leading vertex count exceeded the limit.
        VertexCountTooLarge => VertexCountTooLarge { .. } => "TRIPLES_VERTEX_COUNT_TOO_LARGE",
        /// A token could not be parsed.
        Parse => Parse { .. } => "TRIPLES_PARSE",
        /// The stream ended part-way through an edge.
        IncompleteTriple => IncompleteTriple { .. } => "TRIPLES_INCOMPLETE",
        /// The graph rejected an edge.
        Graph => Graph { .. } => "TRIPLES_GRAPH_REJECTED",
    }
}

impl TripleError {
    /// Returns the broad category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Io(_) => ErrorKind::Io,
            Self::MissingVertexCount
            | Self::NegativeVertexCount { .. }
            | Self::Parse { .. }
            | Self::IncompleteTriple { .. } => ErrorKind::ParseError,
            Self::VertexCountTooLarge { .. } => ErrorKind::InvalidArgument,
            Self::Graph { source, .. } => source.kind(),
        }
    }
}

/// The kind of number a token was expected to hold.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Expected {
    /// The leading vertex count.
    VertexCount,
    /// An edge endpoint.
    VertexId,
    /// An edge weight.
    Weight,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VertexCount => "vertex count",
            Self::VertexId => "vertex id",
            Self::Weight => "weight",
        })
    }
}

/// Yields whitespace-separated tokens with their one-based positions.
struct Tokens<R> {
    reader: R,
    line: String,
    pending: std::vec::IntoIter<String>,
    position: usize,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pending: Vec::new().into_iter(),
            position: 0,
        }
    }

    fn next_token(&mut self) -> Result<Option<(usize, String)>, TripleError> {
        loop {
            if let Some(token) = self.pending.next() {
                self.position += 1;
                return Ok(Some((self.position, token)));
            }
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.pending = self
                .line
                .split_whitespace()
                .map(str::to_owned)
                .collect::<Vec<_>>()
                .into_iter();
        }
    }
}

fn parse_token<T: std::str::FromStr>(
    (position, token): (usize, String),
    expected: Expected,
) -> Result<T, TripleError> {
    token.parse().map_err(|_| TripleError::Parse {
        position,
        token,
        expected,
    })
}

/// Reads a graph from a triple-format stream.
///
/// Pairs that appear more than once keep the first weight, since
/// [`Graph::add_edge`] ignores duplicates.
///
/// # Errors
/// Returns [`TripleError`] when the stream cannot be read, a token is
/// malformed, the final edge is truncated, or the graph rejects an edge.
///
/// # Examples
/// ```
/// use arbor_core::read_triples;
///
/// let graph = read_triples("3\n0 1 0.5\n1 2 1.5\n".as_bytes())?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// # Ok::<(), arbor_core::TripleError>(())
/// ```
#[instrument(name = "triples.read", err, skip(reader))]
pub fn read_triples(reader: impl BufRead) -> Result<Graph, TripleError> {
    let mut tokens = Tokens::new(reader);

    let first = tokens.next_token()?.ok_or(TripleError::MissingVertexCount)?;
    let count: i64 = parse_token(first.clone(), Expected::VertexCount)?;
    if count < 0 {
        return Err(TripleError::NegativeVertexCount { count });
    }
    let vertex_count: usize = parse_token(first, Expected::VertexCount)?;
    if vertex_count > MAX_VERTEX_COUNT {
        return Err(TripleError::VertexCountTooLarge {
            count: vertex_count,
            limit: MAX_VERTEX_COUNT,
        });
    }

    let mut graph =
        Graph::try_new(vertex_count).map_err(|source| TripleError::Graph { edge: 0, source })?;
    let mut edge = 0;
    let mut skipped = 0_usize;
    while let Some(u) = tokens.next_token()? {
        edge += 1;
        let Some(v) = tokens.next_token()? else {
            return Err(TripleError::IncompleteTriple { edge, found: 1 });
        };
        let Some(w) = tokens.next_token()? else {
            return Err(TripleError::IncompleteTriple { edge, found: 2 });
        };
        let u = parse_token(u, Expected::VertexId)?;
        let v = parse_token(v, Expected::VertexId)?;
        let w = parse_token(w, Expected::Weight)?;
        let added = graph
            .add_edge(u, v, w)
            .map_err(|source| TripleError::Graph { edge, source })?;
        if !added {
            skipped += 1;
        }
    }

    debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        duplicates = skipped,
        "graph read"
    );
    Ok(graph)
}

/// Opens `path` and reads a graph from it.
///
/// # Errors
/// Returns [`TripleError::NotFound`] when the file does not exist, and any
/// error of [`read_triples`] otherwise.
pub fn read_triples_path(path: impl AsRef<Path>) -> Result<Graph, TripleError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => TripleError::NotFound {
            path: path.to_path_buf(),
        },
        _ => TripleError::Io(err),
    })?;
    read_triples(BufReader::new(file))
}

/// Writes `graph` in triple format, one edge per line in
/// [`Graph::edges`] order.
///
/// Reading the output back yields a graph equal to `graph`.
///
/// # Errors
/// Returns [`TripleError::Io`] if writing fails.
pub fn write_triples(graph: &Graph, mut writer: impl Write) -> Result<(), TripleError> {
    writeln!(writer, "{}", graph.vertex_count())?;
    for edge in graph.edges() {
        writeln!(
            writer,
            "{} {} {:?}",
            edge.source(),
            edge.target(),
            edge.weight()
        )?;
    }
    writer.flush()?;
    Ok(())
}
